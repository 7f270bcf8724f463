//! Page persistence boundary: a narrow CRUD trait plus the in-memory
//! implementation used by tests and unsaved sessions. Failures surface as
//! values (`SaveOutcome`, `StoreError`), never as panics.

use pagecraft_common::page_id;
use pagecraft_model::Page;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Duplicate page id: {0}")]
    DuplicatePageId(String),
}

/// Recoverable result object handed to the caller for user notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub title: String,
    pub description: String,
}

impl SaveOutcome {
    pub fn ok(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            success: true,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            success: false,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Narrow CRUD interface over the persisted page collection.
pub trait PageStore {
    fn create_page(&mut self, page: Page) -> Result<(), StoreError>;
    fn update_page(&mut self, page: Page) -> Result<(), StoreError>;
    fn delete_page(&mut self, id: &str) -> Result<(), StoreError>;

    /// Clone a page under a fresh id; returns the copy.
    fn duplicate_page(&mut self, id: &str) -> Result<Page, StoreError>;

    fn find_page(&self, id: &str) -> Option<&Page>;
    fn pages(&self) -> Vec<&Page>;
}

/// In-memory page collection.
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    pages: Vec<Page>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStore for MemoryPageStore {
    fn create_page(&mut self, page: Page) -> Result<(), StoreError> {
        if self.pages.iter().any(|p| p.id == page.id) {
            return Err(StoreError::DuplicatePageId(page.id));
        }
        info!(page_id = %page.id, "created page");
        self.pages.push(page);
        Ok(())
    }

    fn update_page(&mut self, page: Page) -> Result<(), StoreError> {
        match self.pages.iter_mut().find(|p| p.id == page.id) {
            Some(slot) => {
                *slot = page;
                Ok(())
            }
            None => Err(StoreError::PageNotFound(page.id)),
        }
    }

    fn delete_page(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.pages.len();
        self.pages.retain(|p| p.id != id);
        if self.pages.len() == before {
            return Err(StoreError::PageNotFound(id.to_string()));
        }
        Ok(())
    }

    fn duplicate_page(&mut self, id: &str) -> Result<Page, StoreError> {
        let original = self
            .find_page(id)
            .ok_or_else(|| StoreError::PageNotFound(id.to_string()))?;

        let mut copy = original.clone();
        copy.id = page_id();
        copy.name = format!("{} copy", copy.name);
        copy.touch();

        self.pages.push(copy.clone());
        Ok(copy)
    }

    fn find_page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    fn pages(&self) -> Vec<&Page> {
        self.pages.iter().collect()
    }
}
