//! # Editor Store
//!
//! The single process-wide state holder UI actions mutate: the flat
//! component list, selection, current device, expansion state, and the
//! undo/redo stack. Every entry point runs synchronously to completion;
//! the tree is rebuilt from the flat list for each structural operation
//! and its flatten becomes the new authoritative list.

use crate::{instantiate, DragPayload, PageStore, SaveOutcome, UndoStack};
use pagecraft_model::Component;
use pagecraft_tree::{ComponentPatch, ComponentTree, DropPosition, ExpansionState};
use tracing::{debug, instrument};

/// Target device the canvas is sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Mobile,
    Tablet,
    Desktop,
}

impl Device {
    pub fn canvas_width(&self) -> f64 {
        match self {
            Device::Mobile => 375.0,
            Device::Tablet => 768.0,
            Device::Desktop => 1280.0,
        }
    }
}

/// Injectable editor state with an explicit action surface. The tree and
/// the class compiler stay pure functions over explicit inputs; this store
/// is their only stateful client.
#[derive(Debug, Default)]
pub struct EditorStore {
    components: Vec<Component>,
    selected_id: Option<String>,
    device: Device,
    expansion: ExpansionState,
    undo_stack: UndoStack,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: Vec<Component>) -> Self {
        Self {
            components,
            ..Self::default()
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn set_device(&mut self, device: Device) {
        self.device = device;
    }

    /// Select a component; ids not in the list clear the selection.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected_id = id
            .filter(|id| self.components.iter().any(|c| c.id == *id))
            .map(str::to_string);
    }

    /// Build the hierarchical view over the current list.
    pub fn tree(&self) -> ComponentTree {
        ComponentTree::build(&self.components, &self.expansion)
    }

    /// Drop a palette payload onto the canvas: instantiate, auto-place,
    /// select. Returns the new component's id.
    #[instrument(skip(self, payload), fields(kind = %payload.kind))]
    pub fn add_component(&mut self, payload: &DragPayload) -> String {
        self.undo_stack.push(self.components.clone());

        let component = instantiate(payload, &self.components);
        let id = component.id.clone();
        self.components.push(component);
        self.selected_id = Some(id.clone());
        debug!(id = %id, "component added");
        id
    }

    /// Reparenting drag drop. Structural rejections leave the list as-is.
    pub fn move_component(&mut self, drag_id: &str, hover_id: &str, position: DropPosition) {
        let mut tree = self.tree();
        let next = tree.move_node(drag_id, hover_id, position);
        self.commit(next, &tree);
    }

    /// Delete the component and its whole subtree, dropping the selection
    /// if it pointed inside.
    pub fn delete_component(&mut self, id: &str) {
        let mut tree = self.tree();
        let next = tree.delete_node(id);
        self.commit(next, &tree);

        if let Some(selected) = &self.selected_id {
            if !self.components.iter().any(|c| &c.id == selected) {
                self.selected_id = None;
            }
        }
    }

    pub fn update_component(&mut self, id: &str, patch: ComponentPatch) {
        let mut tree = self.tree();
        let next = tree.update_component(id, patch);
        self.commit(next, &tree);
    }

    /// View-state action: not undoable, only the expansion map changes.
    pub fn toggle_expanded(&mut self, id: &str) {
        let mut tree = self.tree();
        tree.toggle_expanded(id);
        self.expansion = tree.expansion_state().clone();
    }

    fn commit(&mut self, next: Vec<Component>, tree: &ComponentTree) {
        if next != self.components {
            self.undo_stack.push(self.components.clone());
            self.components = next;
        }
        self.expansion = tree.expansion_state().clone();
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        match self.undo_stack.undo(self.components.clone()) {
            Some(snapshot) => {
                self.components = snapshot;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.undo_stack.redo(self.components.clone()) {
            Some(snapshot) => {
                self.components = snapshot;
                true
            }
            None => false,
        }
    }

    /// Flatten the current tree: the authoritative persisted form.
    pub fn flattened(&self) -> Vec<Component> {
        self.tree().to_component_array()
    }

    /// Check the list against the data-model invariants: unique ids,
    /// resolvable parent references, per-type prop schemas.
    pub fn validate(&self) -> Result<(), crate::EditorError> {
        pagecraft_model::validate_flat_list(&self.components)?;
        for component in &self.components {
            component.validate_props()?;
        }
        Ok(())
    }

    /// Save the current components into the targeted page. Failures come
    /// back as a recoverable outcome for user notification.
    #[instrument(skip(self, store))]
    pub fn save_to(&self, store: &mut dyn PageStore, page_id: Option<&str>) -> SaveOutcome {
        let Some(page_id) = page_id else {
            return SaveOutcome::error("Save failed", "No page selected");
        };
        let Some(page) = store.find_page(page_id) else {
            return SaveOutcome::error("Save failed", format!("Page not found: {}", page_id));
        };

        let mut page = page.clone();
        page.components = self.flattened();
        page.touch();

        match store.update_page(page) {
            Ok(()) => SaveOutcome::ok("Page saved", "All changes stored"),
            Err(err) => SaveOutcome::error("Save failed", err.to_string()),
        }
    }

    /// Components to preview: the stored page when the identifier resolves,
    /// otherwise the in-memory unsaved list. Absence of a valid id is
    /// recoverable, not fatal.
    pub fn preview_components(
        &self,
        store: &dyn PageStore,
        page_id: Option<&str>,
    ) -> Vec<Component> {
        page_id
            .and_then(|id| store.find_page(id))
            .map(|page| page.components.clone())
            .unwrap_or_else(|| self.flattened())
    }
}
