//! # Pagecraft Data Model
//!
//! The persisted shapes shared by every other crate: components, pages and
//! projects, plus the structured style object the class compiler consumes.
//!
//! A page's `components` field is always the **flat** list — each component
//! carries an optional `parentId` back-reference and no embedded children.
//! The nested form (children embedded, no `parentId`) exists only as an
//! alternate serialization of the same structure; the two must round-trip
//! losslessly. The tree crate owns the conversion.

mod component;
mod page;
mod style;

pub use component::{validate_flat_list, Component, ComponentType, ModelError, Props};
pub use page::{Page, PageConfig, Project, SeoMeta};
pub use style::Style;
