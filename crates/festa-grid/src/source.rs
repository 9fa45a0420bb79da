//! Grid source contract
//!
//! A grid source translates one queryable resource into everything a generic
//! admin-grid renderer needs: the base query, the ordered column keys, filter
//! and sort metadata, and a per-record row mapping.

use crate::error::GridError;
use crate::filter::FilterDescriptor;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// One rendered grid row: column key → display value, in `keys()` order
pub type Row = IndexMap<String, Value>;

/// Contract between a resource adapter and the generic grid renderer
///
/// # Contract
/// `keys()` is the sole source of truth for what `map()` may produce: every
/// key in a mapped row comes from `keys()`, in `keys()` order. Keys may be
/// *omitted* per record (an unanswered custom-form question), but never
/// invented.
pub trait GridSource {
    /// Hydrated record type produced by the base query
    type Record;
    /// Query description consumed by the record store
    type Query;

    /// The single query shape every grid fetch uses
    ///
    /// Must eager-load everything `map()` reads so rendering a page issues a
    /// bounded constant number of store statements.
    fn base_query(&self) -> Self::Query;

    /// Ordered column keys
    fn keys(&self) -> Vec<String>;

    /// Filterable columns and how to filter them
    ///
    /// Hand-authored, not derived from `keys()`; loading choice lists may
    /// touch the store, hence the `Result`.
    fn filterable_keys(&self) -> Result<IndexMap<String, FilterDescriptor>, GridError>;

    /// Columns the store can order by
    fn sortable_keys(&self) -> Vec<String>;

    /// Map one fetched record into a flat row
    fn map(&self, record: &Self::Record) -> Result<Row, GridError>;
}

/// A fully rendered grid page
#[derive(Debug, Clone, Serialize)]
pub struct GridPage {
    /// Ordered column keys
    pub keys: Vec<String>,
    /// Mapped rows
    pub rows: Vec<Row>,
}

impl GridPage {
    /// Number of rows on the page
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the page has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
