//! Filter descriptor vocabulary
//!
//! Each filterable column maps to one [`FilterDescriptor`]; the generic grid
//! renderer reads the serialized form to build its filter UI and query
//! predicates. The wire shape is a `type`-tagged object:
//!
//! ```json
//! {"type": "number"}
//! {"type": "enum", "choices": {"approved": "受理"}}
//! {"type": "belongsTo", "to": "users", "keys": {"id": {"translation": "ユーザーID", "type": "number"}}}
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scalar filter types usable for related-resource fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    /// Numeric comparison
    #[serde(rename = "number")]
    Number,
    /// Substring match
    #[serde(rename = "string")]
    String,
    /// Boolean toggle
    #[serde(rename = "bool")]
    Bool,
    /// Set / not-set toggle on a nullable column
    #[serde(rename = "isNull")]
    IsNull,
    /// Date-time range
    #[serde(rename = "datetime")]
    Datetime,
}

/// One filterable field of a related resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedField {
    /// Translated label shown in the filter UI, reproduced verbatim
    pub translation: String,
    /// Scalar filter type
    #[serde(rename = "type")]
    pub field_type: ScalarType,
}

impl RelatedField {
    /// Create a related-field descriptor
    #[inline]
    #[must_use]
    pub fn new(translation: impl Into<String>, field_type: ScalarType) -> Self {
        Self {
            translation: translation.into(),
            field_type,
        }
    }
}

/// How one grid column can be filtered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterDescriptor {
    /// Numeric comparison
    #[serde(rename = "number")]
    Number,
    /// Substring match
    #[serde(rename = "string")]
    String,
    /// Boolean toggle
    #[serde(rename = "bool")]
    Bool,
    /// Set / not-set toggle on a nullable column
    #[serde(rename = "isNull")]
    IsNull,
    /// Date-time range
    #[serde(rename = "datetime")]
    Datetime,
    /// Fixed choice set; keys are stored values, values are display labels
    #[serde(rename = "enum")]
    Enum {
        /// Stored value → display label, in display order
        choices: IndexMap<String, String>,
    },
    /// Filter through a belongs-to relation on a related resource
    #[serde(rename = "belongsTo")]
    BelongsTo {
        /// Related resource name
        to: String,
        /// Filterable fields of the related resource, in display order
        keys: IndexMap<String, RelatedField>,
    },
    /// Filter through a many-to-many pivot
    #[serde(rename = "belongsToMany")]
    BelongsToMany {
        /// Pivot table name
        pivot: String,
        /// Pivot column pointing at this resource
        foreign_key: String,
        /// Pivot column pointing at the related resource
        related_key: String,
        /// Selectable related records
        choices: Vec<serde_json::Value>,
        /// Field of each choice to display
        choices_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_descriptors_serialize_as_tag_only() {
        assert_eq!(
            serde_json::to_value(FilterDescriptor::Number).unwrap(),
            json!({"type": "number"})
        );
        assert_eq!(
            serde_json::to_value(FilterDescriptor::IsNull).unwrap(),
            json!({"type": "isNull"})
        );
        assert_eq!(
            serde_json::to_value(FilterDescriptor::Datetime).unwrap(),
            json!({"type": "datetime"})
        );
    }

    #[test]
    fn enum_descriptor_preserves_choice_order() {
        let mut choices = IndexMap::new();
        choices.insert("rejected".to_string(), "不受理".to_string());
        choices.insert("approved".to_string(), "受理".to_string());
        choices.insert("NULL".to_string(), "確認中".to_string());

        let value = serde_json::to_value(FilterDescriptor::Enum { choices }).unwrap();
        assert_eq!(value["type"], "enum");
        let keys: Vec<_> = value["choices"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["rejected", "approved", "NULL"]);
    }

    #[test]
    fn belongs_to_nests_related_fields() {
        let mut keys = IndexMap::new();
        keys.insert(
            "id".to_string(),
            RelatedField::new("ユーザーID", ScalarType::Number),
        );

        let value = serde_json::to_value(FilterDescriptor::BelongsTo {
            to: "users".to_string(),
            keys,
        })
        .unwrap();

        assert_eq!(
            value,
            json!({
                "type": "belongsTo",
                "to": "users",
                "keys": {"id": {"translation": "ユーザーID", "type": "number"}}
            })
        );
    }

    #[test]
    fn belongs_to_many_carries_pivot_metadata() {
        let value = serde_json::to_value(FilterDescriptor::BelongsToMany {
            pivot: "circle_tag".to_string(),
            foreign_key: "circle_id".to_string(),
            related_key: "tag_id".to_string(),
            choices: vec![json!({"id": 2, "name": "food"})],
            choices_name: "name".to_string(),
        })
        .unwrap();

        assert_eq!(value["type"], "belongsToMany");
        assert_eq!(value["pivot"], "circle_tag");
        assert_eq!(value["foreign_key"], "circle_id");
        assert_eq!(value["related_key"], "tag_id");
        assert_eq!(value["choices_name"], "name");
        assert_eq!(value["choices"][0]["name"], "food");
    }

    #[test]
    fn descriptor_round_trips() {
        let descriptor = FilterDescriptor::String;
        let json = serde_json::to_string(&descriptor).unwrap();
        let back: FilterDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }
}
