//! # Component Model
//!
//! A component is one node of a page tree. The persisted form is flat: each
//! component names its parent through `parentId` and carries no children.
//! The nested form embeds `children` and drops `parentId`. Both describe the
//! same structure; exactly one of the two position encodings applies to any
//! serialized component.

use crate::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Type-dependent key/value prop bag.
pub type Props = BTreeMap<String, serde_json::Value>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown prop '{key}' for component type '{kind}'")]
    UnknownProp { kind: String, key: String },

    #[error("Duplicate component id: {0}")]
    DuplicateId(String),

    #[error("parentId '{parent_id}' on '{id}' references no component in the list")]
    DanglingParent { id: String, parent_id: String },
}

/// Closed set of component types, with an explicit catch-all so unknown
/// strings in persisted data survive a round-trip instead of failing
/// deserialization. Renderers degrade `Other` to a labeled placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    Text,
    Button,
    Image,
    Input,
    Container,
    List,
    Card,
    Divider,
    Space,
    Other(String),
}

impl ComponentType {
    /// Container-like types may hold children; all others are leaves.
    pub fn allows_children(&self) -> bool {
        matches!(
            self,
            ComponentType::Container | ComponentType::List | ComponentType::Card
        )
    }

    /// Markup tag shared by both renderer variants.
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentType::Text => "span",
            ComponentType::Button => "button",
            ComponentType::Image => "img",
            ComponentType::Input => "input",
            ComponentType::Container => "div",
            ComponentType::List => "ul",
            ComponentType::Card => "div",
            ComponentType::Divider => "hr",
            ComponentType::Space => "div",
            ComponentType::Other(_) => "div",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Text => "text",
            ComponentType::Button => "button",
            ComponentType::Image => "image",
            ComponentType::Input => "input",
            ComponentType::Container => "container",
            ComponentType::List => "list",
            ComponentType::Card => "card",
            ComponentType::Divider => "divider",
            ComponentType::Space => "space",
            ComponentType::Other(s) => s,
        }
    }

    /// Optional prop keys accepted for this type. Props are an optional-field
    /// schema: a component may set any subset, but nothing outside the set.
    /// `Other` accepts anything (we cannot know its schema).
    pub fn prop_schema(&self) -> Option<&'static [&'static str]> {
        match self {
            ComponentType::Text => Some(&["text"]),
            ComponentType::Button => Some(&["text", "disabled"]),
            ComponentType::Image => Some(&["src", "alt"]),
            ComponentType::Input => Some(&["placeholder", "value", "inputType"]),
            ComponentType::Container => Some(&[]),
            ComponentType::List => Some(&["ordered"]),
            ComponentType::Card => Some(&["title"]),
            ComponentType::Divider => Some(&[]),
            ComponentType::Space => Some(&["size"]),
            ComponentType::Other(_) => None,
        }
    }
}

impl From<String> for ComponentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => ComponentType::Text,
            "button" => ComponentType::Button,
            "image" => ComponentType::Image,
            "input" => ComponentType::Input,
            "container" => ComponentType::Container,
            "list" => ComponentType::List,
            "card" => ComponentType::Card,
            "divider" => ComponentType::Divider,
            "space" => ComponentType::Space,
            _ => ComponentType::Other(s),
        }
    }
}

impl From<ComponentType> for String {
    fn from(kind: ComponentType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the page tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ComponentType,

    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,

    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,

    /// Precompiled utility-class string. When present it is authoritative
    /// and `style` becomes a fallback only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Back-reference used in the flat persisted form; absent for roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Embedded children, present only in the nested serialization and only
    /// for types where `allows_children()` holds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
}

impl Component {
    pub fn new(id: String, kind: ComponentType) -> Self {
        Self {
            id,
            kind,
            props: Props::new(),
            style: Style::default(),
            class_name: None,
            parent_id: None,
            children: None,
        }
    }

    /// Validate props against the type's optional-field schema.
    pub fn validate_props(&self) -> Result<(), ModelError> {
        let Some(schema) = self.kind.prop_schema() else {
            return Ok(());
        };
        for key in self.props.keys() {
            if !schema.contains(&key.as_str()) {
                return Err(ModelError::UnknownProp {
                    kind: self.kind.to_string(),
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }

    /// String prop lookup helper (most props are plain strings).
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(|v| v.as_str())
    }
}

/// Validate the referential invariants of a flat component list: unique ids
/// and every `parentId` resolving to a component in the same list.
pub fn validate_flat_list(components: &[Component]) -> Result<(), ModelError> {
    let mut ids = std::collections::HashSet::with_capacity(components.len());
    for component in components {
        if !ids.insert(component.id.as_str()) {
            return Err(ModelError::DuplicateId(component.id.clone()));
        }
    }
    for component in components {
        if let Some(parent_id) = &component.parent_id {
            if !ids.contains(parent_id.as_str()) {
                return Err(ModelError::DanglingParent {
                    id: component.id.clone(),
                    parent_id: parent_id.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_round_trips() {
        let json = r#"{"id":"x","type":"hero-banner"}"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(
            component.kind,
            ComponentType::Other("hero-banner".to_string())
        );

        let back = serde_json::to_value(&component).unwrap();
        assert_eq!(back["type"], "hero-banner");
    }

    #[test]
    fn test_known_types_parse() {
        for (s, kind) in [
            ("text", ComponentType::Text),
            ("container", ComponentType::Container),
            ("divider", ComponentType::Divider),
        ] {
            assert_eq!(ComponentType::from(s.to_string()), kind);
        }
    }

    #[test]
    fn test_only_container_likes_allow_children() {
        assert!(ComponentType::Container.allows_children());
        assert!(ComponentType::List.allows_children());
        assert!(ComponentType::Card.allows_children());
        assert!(!ComponentType::Text.allows_children());
        assert!(!ComponentType::Image.allows_children());
        assert!(!ComponentType::Other("grid".to_string()).allows_children());
    }

    #[test]
    fn test_prop_validation() {
        let mut component = Component::new("a".to_string(), ComponentType::Image);
        component
            .props
            .insert("src".to_string(), serde_json::json!("/cat.png"));
        assert!(component.validate_props().is_ok());

        component
            .props
            .insert("onClick".to_string(), serde_json::json!("boom"));
        assert_eq!(
            component.validate_props(),
            Err(ModelError::UnknownProp {
                kind: "image".to_string(),
                key: "onClick".to_string(),
            })
        );
    }

    #[test]
    fn test_other_type_accepts_any_props() {
        let mut component =
            Component::new("a".to_string(), ComponentType::Other("widget".to_string()));
        component
            .props
            .insert("anything".to_string(), serde_json::json!(42));
        assert!(component.validate_props().is_ok());
    }

    #[test]
    fn test_flat_list_validation() {
        let mut a = Component::new("a".to_string(), ComponentType::Container);
        let mut b = Component::new("b".to_string(), ComponentType::Text);
        b.parent_id = Some("a".to_string());
        assert!(validate_flat_list(&[a.clone(), b.clone()]).is_ok());

        b.parent_id = Some("ghost".to_string());
        assert!(matches!(
            validate_flat_list(&[a.clone(), b]),
            Err(ModelError::DanglingParent { .. })
        ));

        a.parent_id = None;
        let dup = a.clone();
        assert!(matches!(
            validate_flat_list(&[a, dup]),
            Err(ModelError::DuplicateId(_))
        ));
    }
}
