//! Registration entry flow for the Festa public site
//!
//! Pure control flow over the authorization, session, and custom-form seams;
//! rendering and routing belong to the web layer.

pub mod entry;

pub use entry::*;
