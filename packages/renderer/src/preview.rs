//! Preview-mode renderer: static read-only output in flow layout. No drag
//! affordances, inputs inert, children rendered recursively.

use crate::markup::{content_children, type_attributes, unknown_placeholder, EMPTY_CONTAINER_LABEL};
use crate::{resolve_presentation, RenderNode};
use pagecraft_model::{Component, ComponentType};

/// Render one component (nested form) for read-only preview.
pub fn render_preview(component: &Component) -> RenderNode {
    if let ComponentType::Other(type_name) = &component.kind {
        return unknown_placeholder(type_name);
    }

    let presentation = resolve_presentation(component);
    let mut node = RenderNode::element(component.kind.tag())
        .with_component_id(component.id.clone())
        .with_attr("data-component-type", component.kind.to_string());

    for (key, value) in type_attributes(component, true) {
        node = node.with_attr(key, value);
    }

    if let Some(classes) = presentation.classes {
        node = node.with_classes(classes);
    }

    // Flow layout: the canvas pixel coordinates do not apply in preview.
    let flow_styles: Vec<(String, String)> = presentation
        .styles
        .into_iter()
        .filter(|(key, _)| !matches!(key.as_str(), "position" | "top" | "left"))
        .collect();
    node = node.with_styles(flow_styles);

    node = node.with_children(content_children(component));

    if component.kind.allows_children() {
        match component.children.as_deref() {
            Some(children) if !children.is_empty() => {
                for child in children {
                    node = node.with_child(render_preview(child));
                }
            }
            _ => node = node.with_child(RenderNode::placeholder(EMPTY_CONTAINER_LABEL)),
        }
    }

    node
}
