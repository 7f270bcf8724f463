//! Component factory: turns a palette drag payload into a freshly minted,
//! auto-placed component.

use pagecraft_common::component_id;
use pagecraft_model::{Component, ComponentType, Props, Style};
use pagecraft_tree::{apply_position, default_size, place_new_component};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serializable descriptor carried by a palette → canvas drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    #[serde(rename = "type")]
    pub kind: ComponentType,

    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub default_props: Props,

    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub default_style: Style,
}

impl DragPayload {
    pub fn new(kind: ComponentType) -> Self {
        Self {
            kind,
            default_props: Props::new(),
            default_style: Style::default(),
        }
    }
}

fn styled_size(style: &Style, kind: &ComponentType) -> (f64, f64) {
    let fallback = default_size(kind);
    let parse = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|v| v.trim_end_matches("px").trim().parse::<f64>().ok())
    };
    (
        parse(&style.width).unwrap_or(fallback.0),
        parse(&style.height).unwrap_or(fallback.1),
    )
}

/// Instantiate a payload against the current component list: fresh
/// timestamped id, default props/style, deterministic canvas placement.
pub fn instantiate(payload: &DragPayload, existing: &[Component]) -> Component {
    let mut component = Component::new(component_id(), payload.kind.clone());
    component.props = payload.default_props.clone();
    component.style = payload.default_style.clone();

    let size = styled_size(&component.style, &component.kind);
    let position = place_new_component(existing, size);
    apply_position(&mut component.style, position);

    debug!(id = %component.id, kind = %component.kind, ?position, "instantiated component");
    component
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_tree::CANVAS_MARGIN;

    #[test]
    fn test_instantiate_stamps_id_and_position() {
        let payload = DragPayload::new(ComponentType::Button);
        let component = instantiate(&payload, &[]);

        assert!(component.id.starts_with("comp-"));
        assert_eq!(component.style.position.as_deref(), Some("absolute"));
        assert_eq!(
            component.style.left.as_deref(),
            Some(format!("{}px", CANVAS_MARGIN).as_str())
        );
    }

    #[test]
    fn test_defaults_carried_over() {
        let mut payload = DragPayload::new(ComponentType::Text);
        payload
            .default_props
            .insert("text".to_string(), serde_json::json!("New text"));
        payload.default_style.color = Some("#333".to_string());

        let component = instantiate(&payload, &[]);
        assert_eq!(component.prop_str("text"), Some("New text"));
        assert_eq!(component.style.color.as_deref(), Some("#333"));
    }

    #[test]
    fn test_payload_serde_round_trip() {
        let payload = DragPayload::new(ComponentType::Image);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""type":"image""#));
        let back: DragPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, back);
    }

    #[test]
    fn test_ids_are_unique_per_instantiation() {
        let payload = DragPayload::new(ComponentType::Text);
        let a = instantiate(&payload, &[]);
        let b = instantiate(&payload, &[a.clone()]);
        assert_ne!(a.id, b.id);
    }
}
