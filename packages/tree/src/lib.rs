//! # Component Tree Manager
//!
//! Sole authority for structural queries and mutations over a page's flat
//! component list.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ flat component list (persisted, parentId)   │
//! └─────────────────────────────────────────────┘
//!                     ↓ build (O(n))
//! ┌─────────────────────────────────────────────┐
//! │ ComponentTree: arena of TreeNode keyed by   │
//! │ id; parent/children are id relations        │
//! │  - queries: roots, node, visible pre-order  │
//! │  - mutations: move / delete / update /      │
//! │    toggle expansion                         │
//! └─────────────────────────────────────────────┘
//!                     ↓ flatten
//! ┌─────────────────────────────────────────────┐
//! │ flat list, parentId recomputed from the     │
//! │ live parent relation (authoritative)        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The flat list is the source of truth**: the tree is a derived view,
//!    rebuilt after every structural change; mutations return a fresh flat
//!    list and never touch the list they were built from.
//! 2. **Structural failures are values**: a move with a missing id or one
//!    that would create a cycle is a silent no-op returning the unchanged
//!    flatten. Nothing in this crate panics or errors on bad structure.
//! 3. **Expansion outlives rebuilds**: node objects die with every rebuild,
//!    so expansion lives in an external id-keyed [`ExpansionState`] map that
//!    is passed into `build` and written through by `toggle_expanded`.

mod node;
mod placement;
mod tree;

pub use node::{ExpansionState, TreeNode};
pub use placement::{
    apply_position, default_size, place_new_component, CANVAS_MARGIN, CANVAS_WIDTH, COMPONENT_GAP,
};
pub use tree::{ComponentPatch, ComponentTree, DropPosition};
