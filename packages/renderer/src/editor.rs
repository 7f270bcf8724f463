//! Editor-mode renderer: interactive canvas output. Every component is
//! absolutely positioned by its pixel coordinates and carries selection and
//! drag/delete/duplicate affordances as data attributes.

use crate::markup::{content_children, type_attributes, unknown_placeholder, EMPTY_CONTAINER_LABEL};
use crate::{resolve_presentation, RenderNode};
use pagecraft_model::{Component, ComponentType};
use tracing::trace;

/// Ancestor context threaded through an editor render pass.
#[derive(Debug, Clone, Default)]
pub struct EditorContext {
    pub selected_id: Option<String>,
}

/// Render one component (nested form) for the editable canvas.
///
/// Unknown types degrade to a placeholder; container-likes without
/// children show the empty-state placeholder. Total, never errors.
pub fn render_editor(component: &Component, ctx: &EditorContext) -> RenderNode {
    if let ComponentType::Other(type_name) = &component.kind {
        return unknown_placeholder(type_name);
    }
    trace!(id = %component.id, kind = %component.kind, "render editor node");

    let presentation = resolve_presentation(component);
    let mut node = RenderNode::element(component.kind.tag())
        .with_component_id(component.id.clone())
        .with_attr("data-component-id", component.id.clone())
        .with_attr("data-component-type", component.kind.to_string())
        .with_attr("draggable", "true")
        .with_attr("data-deletable", "true")
        .with_attr("data-duplicatable", "true");

    if ctx.selected_id.as_deref() == Some(component.id.as_str()) {
        node = node.with_attr("data-selected", "true");
    }

    for (key, value) in type_attributes(component, false) {
        node = node.with_attr(key, value);
    }

    if let Some(classes) = presentation.classes {
        node = node.with_classes(classes);
    }
    node = node.with_styles(presentation.styles);

    // Canvas positioning is absolute; unplaced components pin to origin.
    let left = component.style.left.clone().unwrap_or_else(|| "0px".to_string());
    let top = component.style.top.clone().unwrap_or_else(|| "0px".to_string());
    node = node
        .with_style("position", "absolute")
        .with_style("left", left)
        .with_style("top", top);

    node = node.with_children(content_children(component));

    if component.kind.allows_children() {
        match component.children.as_deref() {
            Some(children) if !children.is_empty() => {
                for child in children {
                    node = node.with_child(render_editor(child, ctx));
                }
            }
            _ => node = node.with_child(RenderNode::placeholder(EMPTY_CONTAINER_LABEL)),
        }
    }

    node
}
