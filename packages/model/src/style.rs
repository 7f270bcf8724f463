use serde::{Deserialize, Serialize};

/// Structured style object attached to a component.
///
/// Every field is optional; `None` means inherit/default. Values are raw CSS
/// value strings with units preserved (`"8px"`, `"50%"`, `"1.5rem"`); the
/// class compiler and the inline-style fallback both pass them through
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

macro_rules! merge_fields {
    ($dst:expr, $src:expr, $($field:ident),+ $(,)?) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field.clone();
            }
        )+
    };
}

impl Style {
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Shallow merge: fields set on `patch` overwrite, `None` fields are
    /// left alone. Used by the tree manager's update operation.
    pub fn merge(&mut self, patch: &Style) {
        merge_fields!(
            self,
            patch,
            margin_top,
            margin_right,
            margin_bottom,
            margin_left,
            padding_top,
            padding_right,
            padding_bottom,
            padding_left,
            width,
            height,
            color,
            background_color,
            font_size,
            font_weight,
            text_align,
            display,
            flex_direction,
            justify_content,
            align_items,
            gap,
            position,
            top,
            left,
            z_index,
            border_radius,
            border_width,
            border_color,
        );
    }

    /// Whether this style hides the element (and therefore its subtree).
    pub fn is_hidden(&self) -> bool {
        self.display.as_deref() == Some("none")
    }
}
