//! Upload download URLs
//!
//! Uploaded answers are never inlined into grid rows; cells carry a URL to
//! the staff download endpoint instead. The route shape itself belongs to the
//! web layer — the contract here is only that the URL is deterministic and
//! parameterized by exactly the form, answer, and question identifiers.

use festa_model::{AnswerId, FormId, QuestionId};

/// Builder for staff upload-download URLs
#[derive(Debug, Clone)]
pub struct UploadUrls {
    base: String,
}

impl UploadUrls {
    /// Builder rooted at the default staff forms path
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: "/staff/forms".to_string(),
        }
    }

    /// Builder rooted at a custom path (e.g. behind a reverse-proxy prefix)
    #[inline]
    #[must_use]
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// URL of the download endpoint for one uploaded answer
    #[must_use]
    pub fn show(&self, form: FormId, answer: AnswerId, question: QuestionId) -> String {
        format!(
            "{}/{form}/answers/{answer}/questions/{question}/upload",
            self.base
        )
    }
}

impl Default for UploadUrls {
    fn default() -> Self {
        Self::new()
    }
}
