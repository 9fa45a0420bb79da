//! Typed identifiers for persisted entities
//!
//! All identifiers are database-issued numeric keys wrapped in newtypes so a
//! circle id can never be passed where a question id is expected.

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw database key
            #[inline]
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw database key
            #[inline]
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Circle registration identifier
    CircleId
);
numeric_id!(
    /// Tag identifier
    TagId
);
numeric_id!(
    /// Custom form identifier
    FormId
);
numeric_id!(
    /// Question identifier within a custom form
    QuestionId
);
numeric_id!(
    /// Form answer identifier
    AnswerId
);
numeric_id!(
    /// Staff user identifier
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_is_raw_key() {
        assert_eq!(CircleId::new(42).to_string(), "42");
        assert_eq!(QuestionId::new(6).to_string(), "6");
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&TagId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn ids_are_distinct_types() {
        // Compile-time property; keep a value-level witness for the raw keys.
        assert_eq!(CircleId::new(1).get(), TagId::new(1).get());
    }
}
