//! Staff-facing grid adapter over circle registrations
//!
//! Translates persisted circle records (plus the answers to the active
//! "circle" custom form) into the tabular contract a generic admin-grid
//! renderer consumes:
//! - [`GridSource`] — the adapter contract: base query, column keys, filter
//!   descriptors, sortable keys, per-record row mapping
//! - [`CirclesGridSource`] — the circles implementation, with dynamic columns
//!   derived from the active custom form
//! - [`FilterDescriptor`] — the wire vocabulary the renderer builds filter
//!   UIs from
//!
//! One adapter instance serves one request: it resolves the active form at
//! construction and memoizes tag choices for its own lifetime only.

pub mod circles;
pub mod error;
pub mod filter;
pub mod routes;
pub mod schema;
pub mod source;

pub use circles::*;
pub use error::*;
pub use filter::*;
pub use routes::*;
pub use schema::*;
pub use source::*;
