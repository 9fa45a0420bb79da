//! Error types for the grid adapter

use festa_model::CircleId;
use festa_store::StoreError;

/// Grid adapter failures
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The store rejected a query
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A row timestamp that every persisted record must carry was absent
    ///
    /// `created_at`/`updated_at` missing means broken upstream data; this is
    /// deliberately loud instead of defaulting to an empty cell.
    #[error("{column} missing on circle {circle}; persisted records must carry it")]
    MissingTimestamp {
        /// The offending column
        column: &'static str,
        /// The record carrying the bad data
        circle: CircleId,
    },

    /// A key outside `keys()` reached the adapter
    ///
    /// `keys()` is the sole source of truth for what `map()` produces, so
    /// this is a programming-contract violation.
    #[error("unknown grid column: {0:?}")]
    UnknownColumn(String),

    /// A cell value failed to serialize
    #[error("value serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
