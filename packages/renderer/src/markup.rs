//! Type→markup mapping shared by the editor and preview renderers.

use crate::RenderNode;
use pagecraft_model::{Component, ComponentType};

pub(crate) const EMPTY_CONTAINER_LABEL: &str = "Drop components here";

pub(crate) fn unknown_placeholder(type_name: &str) -> RenderNode {
    RenderNode::placeholder(format!("Unknown component: {}", type_name))
}

/// Intrinsic content for a leaf type: text nodes for textual components.
pub(crate) fn content_children(component: &Component) -> Vec<RenderNode> {
    match &component.kind {
        ComponentType::Text => vec![RenderNode::text(
            component.prop_str("text").unwrap_or_default(),
        )],
        ComponentType::Button => vec![RenderNode::text(
            component.prop_str("text").unwrap_or("Button"),
        )],
        ComponentType::Card => component
            .prop_str("title")
            .map(|title| vec![RenderNode::text(title)])
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Prop-derived markup attributes. `read_only` marks form controls inert
/// for preview mode.
pub(crate) fn type_attributes(component: &Component, read_only: bool) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    match &component.kind {
        ComponentType::Image => {
            if let Some(src) = component.prop_str("src") {
                attrs.push(("src".to_string(), src.to_string()));
            }
            if let Some(alt) = component.prop_str("alt") {
                attrs.push(("alt".to_string(), alt.to_string()));
            }
        }
        ComponentType::Input => {
            attrs.push((
                "type".to_string(),
                component.prop_str("inputType").unwrap_or("text").to_string(),
            ));
            if let Some(placeholder) = component.prop_str("placeholder") {
                attrs.push(("placeholder".to_string(), placeholder.to_string()));
            }
            if let Some(value) = component.prop_str("value") {
                attrs.push(("value".to_string(), value.to_string()));
            }
            if read_only {
                attrs.push(("readonly".to_string(), "readonly".to_string()));
            }
        }
        ComponentType::Button => {
            let disabled = component
                .props
                .get("disabled")
                .map(|v| v.as_bool().unwrap_or(v.as_str() == Some("true")))
                .unwrap_or(false);
            if disabled {
                attrs.push(("disabled".to_string(), "disabled".to_string()));
            }
        }
        _ => {}
    }
    attrs
}
