use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Render description node.
///
/// Inline styles are ordered pairs rather than a map: declaration order is
/// part of the style compiler's contract and must survive serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderNode {
    Element {
        tag: String,

        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        attributes: HashMap<String, String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        styles: Vec<(String, String)>,

        /// Utility-class string, when the component carries one.
        #[serde(skip_serializing_if = "Option::is_none")]
        classes: Option<String>,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<RenderNode>,

        /// Back-reference to the source component, for hit-testing.
        #[serde(skip_serializing_if = "Option::is_none")]
        component_id: Option<String>,
    },

    Text {
        content: String,
    },

    /// Soft-fail surface: unknown types and empty containers render as a
    /// labeled placeholder instead of erroring.
    Placeholder {
        label: String,
    },
}

impl RenderNode {
    pub fn element(tag: impl Into<String>) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            attributes: HashMap::new(),
            styles: Vec::new(),
            classes: None,
            children: Vec::new(),
            component_id: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text {
            content: content.into(),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        RenderNode::Placeholder {
            label: label.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderNode::Element { ref mut styles, .. } = self {
            styles.push((key.into(), value.into()));
        }
        self
    }

    pub fn with_styles(mut self, pairs: Vec<(String, String)>) -> Self {
        if let RenderNode::Element { ref mut styles, .. } = self {
            styles.extend(pairs);
        }
        self
    }

    pub fn with_classes(mut self, class_string: impl Into<String>) -> Self {
        if let RenderNode::Element {
            ref mut classes, ..
        } = self
        {
            *classes = Some(class_string.into());
        }
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<RenderNode>) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_component_id(mut self, id: impl Into<String>) -> Self {
        if let RenderNode::Element {
            component_id: ref mut cid,
            ..
        } = self
        {
            *cid = Some(id.into());
        }
        self
    }

    /// Attribute lookup helper for assertions and hit-testing.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            RenderNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn style_value(&self, key: &str) -> Option<&str> {
        match self {
            RenderNode::Element { styles, .. } => styles
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element { children, .. } => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let node = RenderNode::element("div")
            .with_attr("data-component-id", "c1")
            .with_style("width", "100px")
            .with_child(RenderNode::text("hi"));

        assert_eq!(node.attr("data-component-id"), Some("c1"));
        assert_eq!(node.style_value("width"), Some("100px"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_serde_tagged() {
        let node = RenderNode::placeholder("Unknown component: widget");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Placeholder");
        assert_eq!(json["label"], "Unknown component: widget");
    }

    #[test]
    fn test_last_style_wins_lookup() {
        let node = RenderNode::element("div")
            .with_style("position", "absolute")
            .with_style("position", "relative");
        assert_eq!(node.style_value("position"), Some("relative"));
    }
}
