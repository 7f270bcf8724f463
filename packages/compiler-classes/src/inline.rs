//! Inline-style fallback. When a component carries no precompiled
//! `className`, the renderer synthesizes CSS property/value pairs covering
//! the same semantic property set directly from the style object.

use pagecraft_model::Style;

/// CSS property/value pairs for a style object, in declaration order.
///
/// Unset fields emit nothing; values pass through verbatim.
pub fn inline_style(style: &Style) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();

    let mut push = |property: &str, value: &Option<String>| {
        if let Some(v) = value.as_deref() {
            if !v.is_empty() {
                out.push((property.to_string(), v.to_string()));
            }
        }
    };

    push("margin-top", &style.margin_top);
    push("margin-right", &style.margin_right);
    push("margin-bottom", &style.margin_bottom);
    push("margin-left", &style.margin_left);

    push("padding-top", &style.padding_top);
    push("padding-right", &style.padding_right);
    push("padding-bottom", &style.padding_bottom);
    push("padding-left", &style.padding_left);

    push("width", &style.width);
    push("height", &style.height);

    push("color", &style.color);
    push("background-color", &style.background_color);

    push("font-size", &style.font_size);
    push("font-weight", &style.font_weight);
    push("text-align", &style.text_align);

    push("display", &style.display);
    push("flex-direction", &style.flex_direction);
    push("justify-content", &style.justify_content);
    push("align-items", &style.align_items);
    push("gap", &style.gap);

    push("border-radius", &style.border_radius);
    push("border-width", &style.border_width);
    push("border-color", &style.border_color);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_semantic_property_set() {
        let style = Style {
            margin_top: Some("8px".to_string()),
            width: Some("100%".to_string()),
            color: Some("#333".to_string()),
            display: Some("flex".to_string()),
            text_align: Some("center".to_string()),
            border_radius: Some("4px".to_string()),
            ..Default::default()
        };

        let pairs = inline_style(&style);
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "margin-top",
                "width",
                "color",
                "text-align",
                "display",
                "border-radius"
            ]
        );
    }

    #[test]
    fn test_empty_style_emits_nothing() {
        assert!(inline_style(&Style::default()).is_empty());
    }

    #[test]
    fn test_zero_is_a_valid_inline_value() {
        // Unlike the class compiler, inline fallback keeps literal zeros:
        // "margin-top: 0" is meaningful CSS.
        let style = Style {
            margin_top: Some("0".to_string()),
            ..Default::default()
        };
        assert_eq!(
            inline_style(&style),
            vec![("margin-top".to_string(), "0".to_string())]
        );
    }
}
