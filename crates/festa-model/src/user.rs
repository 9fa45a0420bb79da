//! Staff users referenced by review metadata

use crate::ids::UserId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered user account
///
/// The grid only reads these (the reviewer behind `status_set_by`); account
/// lifecycle is owned elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Identifier
    pub id: UserId,
    /// University-issued student id
    pub student_id: String,
    /// Family name
    pub name_family: String,
    /// Phonetic reading of the family name
    pub name_family_yomi: String,
    /// Given name
    pub name_given: String,
    /// Phonetic reading of the given name
    pub name_given_yomi: String,
    /// Contact email address
    pub email: String,
    /// Phone number
    pub tel: String,
    /// Whether the account belongs to event staff
    pub is_staff: bool,
    /// Whether the account has admin rights
    pub is_admin: bool,
    /// When the contact email was verified
    pub email_verified_at: Option<NaiveDateTime>,
    /// When the university email was verified
    pub univemail_verified_at: Option<NaiveDateTime>,
    /// Staff-only notes about the account
    pub notes: Option<String>,
    /// Row creation time
    pub created_at: Option<NaiveDateTime>,
    /// Row update time
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    /// Create a minimal account record
    #[must_use]
    pub fn new(
        id: UserId,
        student_id: impl Into<String>,
        name_family: impl Into<String>,
        name_given: impl Into<String>,
    ) -> Self {
        Self {
            id,
            student_id: student_id.into(),
            name_family: name_family.into(),
            name_family_yomi: String::new(),
            name_given: name_given.into(),
            name_given_yomi: String::new(),
            email: String::new(),
            tel: String::new(),
            is_staff: false,
            is_admin: false,
            email_verified_at: None,
            univemail_verified_at: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// With contact details
    #[inline]
    #[must_use]
    pub fn with_contact(mut self, email: impl Into<String>, tel: impl Into<String>) -> Self {
        self.email = email.into();
        self.tel = tel.into();
        self
    }

    /// Mark as staff
    #[inline]
    #[must_use]
    pub fn staff(mut self) -> Self {
        self.is_staff = true;
        self
    }

    /// Mark as admin (implies staff)
    #[inline]
    #[must_use]
    pub fn admin(mut self) -> Self {
        self.is_staff = true;
        self.is_admin = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_implies_staff() {
        let user = User::new(UserId::new(1), "19A1234", "山田", "太郎").admin();
        assert!(user.is_staff);
        assert!(user.is_admin);
    }

    #[test]
    fn user_serializes_optional_fields_as_null() {
        let user = User::new(UserId::new(1), "19A1234", "山田", "太郎");
        let value = serde_json::to_value(&user).unwrap();
        assert!(value["email_verified_at"].is_null());
        assert!(value["notes"].is_null());
    }
}
