//! # Pagecraft Editor
//!
//! Editing engine for a page: the process-wide store UI actions mutate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI action (select, drop, drag, delete, …)   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorStore                         │
//! │  - flat component list (authoritative)      │
//! │  - selection, device, expansion state       │
//! │  - undo/redo snapshots                      │
//! │  - drag sessions with guaranteed release    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ tree: rebuild hierarchy, mutate, flatten    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ page store: persisted Page records (CRUD)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The flat list is the source of truth**: the tree is rebuilt from it
//!    on every structural change; save hands the flatten to the page store.
//! 2. **Everything is synchronous**: mutation entry points run to completion
//!    with no suspension points; callbacks are strictly serialized.
//! 3. **Failures are values**: persistence problems come back as
//!    [`SaveOutcome`] for user notification, never a panic; structural
//!    problems are silent no-ops at the tree layer.

mod drag;
mod errors;
mod factory;
mod page_store;
mod store;
mod undo_stack;

pub use drag::{DragSession, ListenerGuard, SNAP_THRESHOLD};
pub use errors::EditorError;
pub use factory::{instantiate, DragPayload};
pub use page_store::{MemoryPageStore, PageStore, SaveOutcome, StoreError};
pub use store::{Device, EditorStore};
pub use undo_stack::UndoStack;

// Re-export the tree surface store clients usually need.
pub use pagecraft_tree::{ComponentPatch, ComponentTree, DropPosition, ExpansionState};
