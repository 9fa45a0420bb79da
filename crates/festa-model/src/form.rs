//! Custom forms, questions, and submitted answers
//!
//! Admins attach a typed custom form (e.g. type `"circle"`) to a registration
//! workflow. The form owns an ordered list of questions; a respondent's
//! submission is one `FormAnswer` with one `AnswerDetail` per answered
//! question.

use crate::ids::{AnswerId, CircleId, FormId, QuestionId};
use serde::{Deserialize, Serialize};

/// Kind of input a question renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Single-line free text
    Text,
    /// Multi-line free text
    Textarea,
    /// Numeric input
    Number,
    /// Single choice from radio buttons
    Radio,
    /// Multiple choice from checkboxes
    Checkbox,
    /// Single choice from a dropdown
    Select,
    /// File upload
    Upload,
}

impl QuestionType {
    /// Whether answers to this question reference an uploaded file
    #[inline]
    #[must_use]
    pub fn is_upload(self) -> bool {
        matches!(self, Self::Upload)
    }
}

/// A single field definition owned by a custom form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier; namespaces the question's grid column
    pub id: QuestionId,
    /// Owning form
    pub form_id: FormId,
    /// Input kind
    pub question_type: QuestionType,
    /// Prompt shown to respondents
    pub name: String,
}

impl Question {
    /// Create a question
    #[inline]
    #[must_use]
    pub fn new(
        id: QuestionId,
        form_id: FormId,
        question_type: QuestionType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            form_id,
            question_type,
            name: name.into(),
        }
    }
}

/// An admin-configured, typed set of extra questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomForm {
    /// Identifier
    pub id: FormId,
    /// Workflow this form attaches to, e.g. `"circle"`
    pub form_type: String,
    /// Admin-facing form name
    pub name: String,
    /// Optional long description; its presence gates a terms-of-service step
    pub description: Option<String>,
    /// Ordered questions
    pub questions: Vec<Question>,
}

impl CustomForm {
    /// Create an empty form
    #[inline]
    #[must_use]
    pub fn new(id: FormId, form_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            form_type: form_type.into(),
            name: name.into(),
            description: None,
            questions: Vec::new(),
        }
    }

    /// With a description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a question, preserving form order
    #[inline]
    #[must_use]
    pub fn with_question(mut self, question_type: QuestionType, id: QuestionId, name: impl Into<String>) -> Self {
        self.questions
            .push(Question::new(id, self.id, question_type, name));
        self
    }
}

/// A respondent's submission against one custom form
///
/// At most one exists per circle and form pair; detail rows hang off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAnswer {
    /// Identifier
    pub id: AnswerId,
    /// Circle the submission belongs to
    pub circle_id: CircleId,
    /// Form the submission answers
    pub form_id: FormId,
}

impl FormAnswer {
    /// Create an answer row
    #[inline]
    #[must_use]
    pub const fn new(id: AnswerId, circle_id: CircleId, form_id: FormId) -> Self {
        Self {
            id,
            circle_id,
            form_id,
        }
    }
}

/// One answered question within a `FormAnswer`
///
/// Upload answers carry no inline value; the stored file is addressed through
/// the owning answer and question identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDetail {
    /// Owning answer
    pub answer_id: AnswerId,
    /// Question this detail answers
    pub question_id: QuestionId,
    /// Literal value for non-upload questions
    pub value: Option<String>,
}

impl AnswerDetail {
    /// Create a detail with a literal value
    #[inline]
    #[must_use]
    pub fn with_value(answer_id: AnswerId, question_id: QuestionId, value: impl Into<String>) -> Self {
        Self {
            answer_id,
            question_id,
            value: Some(value.into()),
        }
    }

    /// Create a detail referencing an uploaded file
    #[inline]
    #[must_use]
    pub const fn uploaded(answer_id: AnswerId, question_id: QuestionId) -> Self {
        Self {
            answer_id,
            question_id,
            value: None,
        }
    }
}
