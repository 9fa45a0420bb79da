//! Domain entities for the Festa event-management backend
//!
//! Defines the persisted shapes the rest of the workspace reads:
//! - Circle registrations and their tri-state review status
//! - Tags attached to circles
//! - Custom forms, their questions, and submitted answers
//! - Staff users referenced by review metadata

pub mod circle;
pub mod form;
pub mod ids;
pub mod tag;
pub mod user;

pub use circle::*;
pub use form::*;
pub use ids::*;
pub use tag::*;
pub use user::*;
