//! Class/style resolution shared by both renderer variants.
//!
//! When a component carries a precompiled `className`, the class string is
//! authoritative and `style` contributes only the properties the class
//! system cannot express (layout/flex, text alignment, position offsets,
//! borders), plus one always-applied safety property. Without a
//! `className`, the full inline fallback covers the whole semantic set.

use pagecraft_compiler_classes::inline_style;
use pagecraft_model::{Component, Style};

/// Resolved presentation for one component.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub classes: Option<String>,
    pub styles: Vec<(String, String)>,
}

/// Applied to every rendered element regardless of resolution path.
const SAFETY_PROPERTY: (&str, &str) = ("box-sizing", "border-box");

/// Properties outside the utility-class patterns, emitted even when a
/// `className` is present.
fn class_inexpressible(style: &Style) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut push = |property: &str, value: &Option<String>| {
        if let Some(v) = value.as_deref() {
            if !v.is_empty() {
                out.push((property.to_string(), v.to_string()));
            }
        }
    };

    push("text-align", &style.text_align);
    push("display", &style.display);
    push("flex-direction", &style.flex_direction);
    push("justify-content", &style.justify_content);
    push("align-items", &style.align_items);
    push("gap", &style.gap);
    push("position", &style.position);
    push("top", &style.top);
    push("left", &style.left);
    push("z-index", &style.z_index);
    push("border-radius", &style.border_radius);
    push("border-width", &style.border_width);
    push("border-color", &style.border_color);

    out
}

pub fn resolve_presentation(component: &Component) -> Presentation {
    let mut styles = vec![(SAFETY_PROPERTY.0.to_string(), SAFETY_PROPERTY.1.to_string())];

    match &component.class_name {
        Some(classes) => {
            styles.extend(class_inexpressible(&component.style));
            Presentation {
                classes: Some(classes.clone()),
                styles,
            }
        }
        None => {
            styles.extend(inline_style(&component.style));
            // Position offsets are not part of the inline fallback set.
            for (property, value) in [
                ("position", &component.style.position),
                ("top", &component.style.top),
                ("left", &component.style.left),
                ("z-index", &component.style.z_index),
            ] {
                if let Some(v) = value.as_deref() {
                    if !v.is_empty() {
                        styles.push((property.to_string(), v.to_string()));
                    }
                }
            }
            Presentation {
                classes: None,
                styles,
            }
        }
    }
}
