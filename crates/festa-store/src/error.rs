//! Error types for the record store seam

/// Store-level failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// More than one active custom form exists for a type
    ///
    /// The adapter assumes a single current form per type; two active forms
    /// is a configuration error rejected at resolution time rather than
    /// producing an undefined column order.
    #[error("ambiguous custom form configuration: {count} active forms of type {form_type:?}")]
    AmbiguousForm {
        /// The requested form type
        form_type: String,
        /// How many active forms matched
        count: usize,
    },

    /// An ordering was requested on a key the store cannot sort by
    #[error("cannot order circles by {0:?}")]
    UnsortableKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_form_message_names_type_and_count() {
        let err = StoreError::AmbiguousForm {
            form_type: "circle".to_string(),
            count: 2,
        };
        let text = err.to_string();
        assert!(text.contains("circle"));
        assert!(text.contains('2'));
    }

    #[test]
    fn unsortable_key_message() {
        let err = StoreError::UnsortableKey("tags".to_string());
        assert!(err.to_string().contains("tags"));
    }
}
