//! Record store seam for the Festa admin backend
//!
//! The grid adapter never talks to a database directly; it describes what it
//! needs as a [`CircleQuery`] and reads back hydrated [`CircleRecord`]s:
//! - [`RecordStore`] / [`CustomFormProvider`] are the seams a real backend
//!   implements
//! - [`MemoryStore`] is the in-process reference implementation; it counts
//!   issued statements so eager-loading guarantees stay testable

pub mod error;
pub mod memory;
pub mod query;
pub mod record;
pub mod store;

pub use error::*;
pub use memory::*;
pub use query::*;
pub use record::*;
pub use store::*;
