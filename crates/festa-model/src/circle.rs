//! Circle registration records
//!
//! A circle is a club/group applying to take part in an event. Staff review
//! submitted registrations and set a tri-state status: approved, rejected, or
//! still pending (no status set).

use crate::ids::{CircleId, UserId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review status set by staff
///
/// Pending registrations carry no status at all (`Option::None`), mirroring
/// the nullable status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleStatus {
    /// Registration accepted
    Approved,
    /// Registration refused
    Rejected,
}

/// A circle registration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Identifier
    pub id: CircleId,
    /// Display name
    pub name: String,
    /// Phonetic reading of the name
    pub name_yomi: String,
    /// Name of the owning group
    pub group_name: String,
    /// Phonetic reading of the group name
    pub group_name_yomi: String,
    /// When the registration was submitted; `None` while still a draft
    pub submitted_at: Option<NaiveDateTime>,
    /// Review status; `None` while pending
    pub status: Option<CircleStatus>,
    /// When the status was last set
    pub status_set_at: Option<NaiveDateTime>,
    /// Staff user who set the status
    pub status_set_by: Option<UserId>,
    /// Free-text staff notes
    pub notes: Option<String>,
    /// Row creation time; assumed present on every persisted record
    pub created_at: Option<NaiveDateTime>,
    /// Row update time; assumed present on every persisted record
    pub updated_at: Option<NaiveDateTime>,
}

impl Circle {
    /// Create a draft registration with empty readings
    #[inline]
    #[must_use]
    pub fn new(id: CircleId, name: impl Into<String>, group_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            name_yomi: String::new(),
            group_name: group_name.into(),
            group_name_yomi: String::new(),
            submitted_at: None,
            status: None,
            status_set_at: None,
            status_set_by: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// With phonetic readings
    #[inline]
    #[must_use]
    pub fn with_yomi(mut self, name_yomi: impl Into<String>, group_yomi: impl Into<String>) -> Self {
        self.name_yomi = name_yomi.into();
        self.group_name_yomi = group_yomi.into();
        self
    }

    /// Mark as submitted at the given time
    #[inline]
    #[must_use]
    pub fn submitted(mut self, at: NaiveDateTime) -> Self {
        self.submitted_at = Some(at);
        self
    }

    /// With a review decision
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: CircleStatus, at: NaiveDateTime, by: UserId) -> Self {
        self.status = Some(status);
        self.status_set_at = Some(at);
        self.status_set_by = Some(by);
        self
    }

    /// With staff notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// With row timestamps
    #[inline]
    #[must_use]
    pub fn with_timestamps(mut self, created_at: NaiveDateTime, updated_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    /// Whether the registration has been submitted
    ///
    /// This is the predicate behind the store's "submitted" scope.
    #[inline]
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_circle_is_draft() {
        let circle = Circle::new(CircleId::new(1), "Foo", "Foo Group");
        assert!(!circle.is_submitted());
        assert!(circle.status.is_none());
    }

    #[test]
    fn submitted_sets_predicate() {
        let circle = Circle::new(CircleId::new(1), "Foo", "Foo Group").submitted(at(10));
        assert!(circle.is_submitted());
    }

    #[test]
    fn with_status_records_actor_and_time() {
        let circle = Circle::new(CircleId::new(1), "Foo", "Foo Group")
            .submitted(at(10))
            .with_status(CircleStatus::Approved, at(12), UserId::new(3));

        assert_eq!(circle.status, Some(CircleStatus::Approved));
        assert_eq!(circle.status_set_at, Some(at(12)));
        assert_eq!(circle.status_set_by, Some(UserId::new(3)));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CircleStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&CircleStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
