//! Store seams implemented by real backends
//!
//! # Query bounds
//! Implementations must treat eager loads as batch statements: hydrating a
//! page of N circles issues a bounded constant number of statements, never
//! one per record or per relation row.

use crate::error::StoreError;
use crate::query::CircleQuery;
use crate::record::CircleRecord;
use festa_model::{CustomForm, Tag};

/// Queryable source of circle records
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Fetch hydrated circle records for a query
    ///
    /// Honors the submitted scope, column selection, eager-load constraints
    /// (including the per-form answer restriction), and ordering.
    fn fetch_circles(&self, query: &CircleQuery) -> Result<Vec<CircleRecord>, StoreError>;

    /// Load every tag, for filter choice lists
    fn all_tags(&self) -> Result<Vec<Tag>, StoreError>;
}

/// Source of active custom form definitions
pub trait CustomFormProvider: Send + Sync + std::fmt::Debug {
    /// Resolve the active form for a workflow type
    ///
    /// Returns `Ok(None)` when no form of that type is configured — a normal
    /// state, not an error. Two active forms of one type is a configuration
    /// precondition violation and must fail with
    /// [`StoreError::AmbiguousForm`].
    fn form_by_type(&self, form_type: &str) -> Result<Option<CustomForm>, StoreError>;
}
