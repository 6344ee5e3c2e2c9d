//! Error types for the fallible, startup-only operations.
//!
//! Nothing that runs per frame returns these: casting, drawing and object
//! updates handle their edge cases locally.

/// Errors from building or loading a [`Grid`](crate::world::grid::Grid).
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("grid has no rows")]
    NoRows,
    #[error("grid has zero width")]
    ZeroWidth,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },
}

/// Errors from loading or validating [`Settings`](crate::config::Settings).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
