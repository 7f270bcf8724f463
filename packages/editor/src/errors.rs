use pagecraft_model::ModelError;
use thiserror::Error;

/// Errors surfaced by the editor crate's fallible surfaces (validation and
/// persistence). Structural tree problems never appear here — they are
/// silent no-ops by design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Store error: {0}")]
    Store(#[from] crate::StoreError),
}
