//! The tree itself: arena of nodes keyed by id, built from a flat list,
//! flattened back after every structural mutation.

use crate::{ExpansionState, TreeNode};
use pagecraft_model::{Component, Props, Style};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Where a dragged node lands relative to the hovered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
    Inside,
}

/// Shallow update applied to one component. Props merge keywise and
/// `class_name` replaces when set. The style patch is a sparse overlay,
/// not a replacement: set fields overwrite, unset fields keep their
/// current value and can never clear one.
#[derive(Debug, Clone, Default)]
pub struct ComponentPatch {
    pub props: Option<Props>,
    pub style: Option<Style>,
    pub class_name: Option<String>,
}

/// Hierarchical view over a flat component list.
#[derive(Debug, Clone)]
pub struct ComponentTree {
    nodes: HashMap<String, TreeNode>,
    roots: Vec<String>,
    expansion: ExpansionState,
}

impl ComponentTree {
    /// Build the tree from a flat list, O(n).
    ///
    /// Pass 1 creates a node per component (expansion restored from the
    /// external map, defaulting to expanded). Pass 2 links children through
    /// `parentId` in list order and assigns depth. Pass 3 computes
    /// visibility for the whole forest.
    ///
    /// A `parentId` that references no component in the list demotes the
    /// node to a root rather than dropping it. Parent pointers that form a
    /// cycle (every id resolves, but the group is reachable from no root)
    /// are broken the same way: the first-listed member of each unrooted
    /// group is demoted to a root, so no node is ever lost.
    #[instrument(skip(components, expansion), fields(count = components.len()))]
    pub fn build(components: &[Component], expansion: &ExpansionState) -> Self {
        let mut nodes: HashMap<String, TreeNode> = HashMap::with_capacity(components.len());
        let mut order: Vec<String> = Vec::with_capacity(components.len());

        for component in components {
            let is_expanded = expansion.get(&component.id).copied().unwrap_or(true);
            let mut flat = component.clone();
            flat.children = None;
            // Duplicate ids collapse to the last occurrence.
            if nodes
                .insert(flat.id.clone(), TreeNode::new(flat.clone(), is_expanded))
                .is_none()
            {
                order.push(flat.id);
            }
        }

        let mut roots: Vec<String> = Vec::new();
        for id in &order {
            let parent_id = match nodes.get(id) {
                Some(node) => node.component.parent_id.clone(),
                None => continue,
            };
            match parent_id {
                Some(pid) if pid != *id && nodes.contains_key(&pid) => {
                    if let Some(node) = nodes.get_mut(id) {
                        node.parent = Some(pid.clone());
                    }
                    if let Some(parent) = nodes.get_mut(&pid) {
                        parent.children.push(id.clone());
                    }
                }
                _ => roots.push(id.clone()),
            }
        }

        let mut reachable: HashSet<String> = HashSet::with_capacity(order.len());
        for root in &roots {
            mark_reachable(&nodes, root, &mut reachable);
        }
        for id in &order {
            if reachable.contains(id) {
                continue;
            }
            // Unrooted: part of a parent-pointer cycle (or hanging off one).
            let parent = nodes.get(id).and_then(|node| node.parent.clone());
            if let Some(pid) = parent {
                if let Some(parent_node) = nodes.get_mut(&pid) {
                    parent_node.children.retain(|child| child != id);
                }
            }
            if let Some(node) = nodes.get_mut(id) {
                node.parent = None;
            }
            roots.push(id.clone());
            mark_reachable(&nodes, id, &mut reachable);
        }

        let mut tree = Self {
            nodes,
            roots,
            expansion: expansion.clone(),
        };
        tree.recompute_depths();
        tree.recompute_visibility();
        debug!(roots = tree.roots.len(), "built component tree");
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn root_nodes(&self) -> Vec<&TreeNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id)).collect()
    }

    /// Current expansion state, for carrying into the next rebuild.
    pub fn expansion_state(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Pre-order traversal of visible nodes, skipping the subtrees below
    /// unexpanded or invisible nodes.
    pub fn visible_nodes(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        for root in &self.roots {
            self.collect_visible(root, &mut out);
        }
        out
    }

    fn collect_visible<'a>(&'a self, id: &str, out: &mut Vec<&'a TreeNode>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if node.is_visible {
            out.push(node);
        }
        if node.is_visible && node.is_expanded {
            for child in &node.children {
                self.collect_visible(child, out);
            }
        }
    }

    /// Move `drag_id` relative to `hover_id`.
    ///
    /// A missing id, a self-target, or a hover inside the dragged subtree
    /// (cycle) makes this a no-op returning the unchanged flatten. `Inside`
    /// appends as last child; `Before`/`After` splice into the hover's
    /// sibling list. Depth is recomputed for the moved subtree only,
    /// visibility for the whole forest.
    #[instrument(skip(self))]
    pub fn move_node(
        &mut self,
        drag_id: &str,
        hover_id: &str,
        position: DropPosition,
    ) -> Vec<Component> {
        if drag_id == hover_id
            || !self.nodes.contains_key(drag_id)
            || !self.nodes.contains_key(hover_id)
            || self.is_descendant(hover_id, drag_id)
        {
            debug!(drag_id, hover_id, "move rejected");
            return self.to_component_array();
        }

        self.detach(drag_id);

        match position {
            DropPosition::Inside => {
                if let Some(hover) = self.nodes.get_mut(hover_id) {
                    hover.children.push(drag_id.to_string());
                }
                if let Some(drag) = self.nodes.get_mut(drag_id) {
                    drag.parent = Some(hover_id.to_string());
                }
            }
            DropPosition::Before | DropPosition::After => {
                let new_parent = self
                    .nodes
                    .get(hover_id)
                    .and_then(|hover| hover.parent.clone());

                match &new_parent {
                    Some(pid) => {
                        if let Some(parent_node) = self.nodes.get_mut(pid) {
                            splice_sibling(&mut parent_node.children, hover_id, drag_id, position);
                        }
                    }
                    None => splice_sibling(&mut self.roots, hover_id, drag_id, position),
                }

                if let Some(drag) = self.nodes.get_mut(drag_id) {
                    drag.parent = new_parent;
                }
            }
        }

        self.recompute_subtree_depth(drag_id);
        self.recompute_visibility();
        self.to_component_array()
    }

    /// Flip expansion and write it through to the expansion-state map so a
    /// later rebuild restores it.
    pub fn toggle_expanded(&mut self, id: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.is_expanded = !node.is_expanded;
            self.expansion.insert(id.to_string(), node.is_expanded);
            self.recompute_visibility();
        }
    }

    /// Remove the node and its whole subtree. Deletion always cascades;
    /// there is no separate childless path.
    #[instrument(skip(self))]
    pub fn delete_node(&mut self, id: &str) -> Vec<Component> {
        if !self.nodes.contains_key(id) {
            return self.to_component_array();
        }

        self.detach(id);

        let mut doomed = Vec::new();
        self.collect_subtree(id, &mut doomed);
        debug!(removed = doomed.len(), "cascading delete");
        for dead in doomed {
            self.nodes.remove(&dead);
            self.expansion.remove(&dead);
        }

        self.to_component_array()
    }

    /// Shallow-merge a patch into one component. Visibility is recomputed
    /// when the patch touches style, since `display` may have changed.
    pub fn update_component(&mut self, id: &str, patch: ComponentPatch) -> Vec<Component> {
        let style_touched = patch.style.is_some();
        if let Some(node) = self.nodes.get_mut(id) {
            if let Some(props) = patch.props {
                node.component.props.extend(props);
            }
            if let Some(style) = &patch.style {
                node.component.style.merge(style);
            }
            if let Some(class_name) = patch.class_name {
                node.component.class_name = Some(class_name);
            }
            if style_touched {
                self.recompute_visibility();
            }
        }
        self.to_component_array()
    }

    /// Authoritative serialization: pre-order flatten with each component's
    /// `parentId` rewritten from the live parent relation and embedded
    /// children cleared.
    pub fn to_component_array(&self) -> Vec<Component> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            self.flatten_into(root, &mut out);
        }
        out
    }

    /// Nested serialization: children embedded, `parentId` cleared. The
    /// alternate lossless encoding of the same structure, consumed by the
    /// recursive preview renderer.
    pub fn to_nested_components(&self) -> Vec<Component> {
        self.roots
            .iter()
            .filter_map(|id| self.nest_from(id))
            .collect()
    }

    fn nest_from(&self, id: &str) -> Option<Component> {
        let node = self.nodes.get(id)?;
        let mut component = node.component.clone();
        component.parent_id = None;
        component.children = if node.children.is_empty() {
            None
        } else {
            Some(
                node.children
                    .iter()
                    .filter_map(|child| self.nest_from(child))
                    .collect(),
            )
        };
        Some(component)
    }

    fn flatten_into(&self, id: &str, out: &mut Vec<Component>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let mut component = node.component.clone();
        component.parent_id = node.parent.clone();
        component.children = None;
        out.push(component);
        for child in &node.children {
            self.flatten_into(child, out);
        }
    }

    /// Is `id` inside the subtree rooted at `ancestor` (inclusive)?
    ///
    /// The walk is bounded by the node count: a parent chain can never be
    /// longer than the tree, so running out of hops means the chain loops.
    fn is_descendant(&self, id: &str, ancestor: &str) -> bool {
        let mut current = Some(id.to_string());
        let mut hops = self.nodes.len();
        while let Some(cursor) = current {
            if cursor == ancestor {
                return true;
            }
            if hops == 0 {
                return false;
            }
            hops -= 1;
            current = self.nodes.get(&cursor).and_then(|node| node.parent.clone());
        }
        false
    }

    fn detach(&mut self, id: &str) {
        let parent = self.nodes.get(id).and_then(|node| node.parent.clone());
        match parent {
            Some(pid) => {
                if let Some(parent_node) = self.nodes.get_mut(&pid) {
                    parent_node.children.retain(|child| child != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }
        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = None;
        }
    }

    fn collect_subtree(&self, id: &str, out: &mut Vec<String>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        out.push(id.to_string());
        for child in &node.children {
            self.collect_subtree(child, out);
        }
    }

    fn recompute_depths(&mut self) {
        let mut stack: Vec<(String, usize)> =
            self.roots.iter().map(|id| (id.clone(), 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            let children = match self.nodes.get_mut(&id) {
                Some(node) => {
                    node.depth = depth;
                    node.children.clone()
                }
                None => continue,
            };
            for child in children {
                stack.push((child, depth + 1));
            }
        }
    }

    fn recompute_subtree_depth(&mut self, id: &str) {
        let base = self
            .nodes
            .get(id)
            .and_then(|node| node.parent.as_ref())
            .and_then(|pid| self.nodes.get(pid))
            .map(|parent| parent.depth + 1)
            .unwrap_or(0);

        let mut stack = vec![(id.to_string(), base)];
        while let Some((cursor, depth)) = stack.pop() {
            let children = match self.nodes.get_mut(&cursor) {
                Some(node) => {
                    node.depth = depth;
                    node.children.clone()
                }
                None => continue,
            };
            for child in children {
                stack.push((child, depth + 1));
            }
        }
    }

    fn recompute_visibility(&mut self) {
        // ancestors_ok: every ancestor visible and expanded.
        let mut stack: Vec<(String, bool)> =
            self.roots.iter().map(|id| (id.clone(), true)).collect();
        while let Some((id, ancestors_ok)) = stack.pop() {
            let (descend_ok, children) = match self.nodes.get_mut(&id) {
                Some(node) => {
                    node.is_visible = ancestors_ok && !node.component.style.is_hidden();
                    (node.is_visible && node.is_expanded, node.children.clone())
                }
                None => continue,
            };
            for child in children {
                stack.push((child, descend_ok));
            }
        }
    }
}

/// Mark `start` and everything below it reachable.
fn mark_reachable(nodes: &HashMap<String, TreeNode>, start: &str, seen: &mut HashSet<String>) {
    let mut stack = vec![start.to_string()];
    while let Some(id) = stack.pop() {
        if !seen.insert(id.clone()) {
            continue;
        }
        if let Some(node) = nodes.get(&id) {
            stack.extend(node.children.iter().cloned());
        }
    }
}

/// Insert `drag_id` into a sibling list at the hover's index (before) or
/// index + 1 (after). A hover missing from the list appends.
fn splice_sibling(siblings: &mut Vec<String>, hover_id: &str, drag_id: &str, position: DropPosition) {
    let hover_index = siblings
        .iter()
        .position(|id| id == hover_id)
        .unwrap_or(siblings.len());
    let insert_at = match position {
        DropPosition::Before => hover_index,
        _ => hover_index + 1,
    };
    siblings.insert(insert_at.min(siblings.len()), drag_id.to_string());
}
