//! Tags attached to circles by staff

use crate::ids::TagId;
use serde::{Deserialize, Serialize};

/// A staff-curated label, attached to circles via the `circle_tag` pivot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Identifier
    pub id: TagId,
    /// Display name
    pub name: String,
}

impl Tag {
    /// Create a tag
    #[inline]
    #[must_use]
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
