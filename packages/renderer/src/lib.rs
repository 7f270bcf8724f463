//! # Component Renderers
//!
//! Pure functions from a component (plus ancestor context) to a render
//! description. Two variants share one type→markup mapping and one
//! class/style resolution policy:
//!
//! - **editor mode** — interactive canvas: absolute pixel positioning,
//!   selection ring and drag/delete/duplicate affordances as data
//!   attributes.
//! - **preview mode** — static flow layout, read-only inputs, recursive
//!   rendering of children.
//!
//! Unknown component types degrade to a labeled placeholder showing the
//! literal type string. Never an error: rendering is total.

mod editor;
mod markup;
mod preview;
mod render_node;
mod resolve;

pub use editor::{render_editor, EditorContext};
pub use preview::render_preview;
pub use render_node::RenderNode;
pub use resolve::{resolve_presentation, Presentation};
