use pagecraft_model::Component;
use std::collections::HashMap;

/// Expansion state keyed by component id, held outside the tree so it
/// survives rebuilds (node identities do not).
pub type ExpansionState = HashMap<String, bool>;

/// Derived, ephemeral view of one component inside a built tree.
///
/// `parent` and `children` are id relations into the owning tree's arena,
/// never owning references. Everything here is recomputed on rebuild except
/// `is_expanded`, which is restored from the external [`ExpansionState`].
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub component: Component,

    /// Parent id; `None` for roots. Authoritative while the tree lives —
    /// flatten writes it back over the component's stale `parent_id`.
    pub parent: Option<String>,

    /// Child ids in display order.
    pub children: Vec<String>,

    /// Root depth 0; invariant `depth == parent.depth + 1`.
    pub depth: usize,

    pub is_expanded: bool,

    /// True iff every ancestor is visible and expanded and this node's own
    /// `style.display` is not `"none"`.
    pub is_visible: bool,
}

impl TreeNode {
    pub(crate) fn new(component: Component, is_expanded: bool) -> Self {
        Self {
            component,
            parent: None,
            children: Vec::new(),
            depth: 0,
            is_expanded,
            is_visible: true,
        }
    }

    pub fn id(&self) -> &str {
        &self.component.id
    }
}
