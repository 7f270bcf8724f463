use crate::Component;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page-level style configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<f64>,
}

/// SEO metadata attached to a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// A persisted page. `components` is the authoritative flat form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PageConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoMeta>,

    #[serde(default)]
    pub components: Vec<Component>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(id: String, name: impl Into<String>) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id,
            title: name.clone(),
            name,
            description: None,
            config: None,
            seo: None,
            components: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Ordered collection of pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub pages: Vec<Page>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(id: String, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            description: None,
            pages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentType;

    #[test]
    fn test_page_serde_round_trip() {
        let mut page = Page::new("page-1-0".to_string(), "Home");
        let mut component = Component::new("comp-1-0".to_string(), ComponentType::Text);
        component
            .props
            .insert("text".to_string(), serde_json::json!("hello"));
        page.components.push(component);

        let json = serde_json::to_string(&page).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(page, back);
    }

    #[test]
    fn test_page_json_shape() {
        let page = Page::new("page-1-0".to_string(), "Home");
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json["components"].as_array().unwrap().is_empty());
    }
}
