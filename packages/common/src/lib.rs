//! Shared building blocks for the Pagecraft workspace: id generation with
//! embedded creation timestamps.

mod id;

pub use id::{component_id, id_timestamp, newest_id, page_id};
