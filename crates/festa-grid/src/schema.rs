//! Column schema composition
//!
//! The circles grid schema is an ordered list of typed column descriptors:
//! a fixed prefix of base columns, one synthetic column per question of the
//! active custom form (in form order), and a fixed suffix of base columns.
//! Composition is pure data; nothing here touches a store.

use festa_model::{CustomForm, QuestionId};

/// Prefix namespacing every custom-form column key
pub const CUSTOM_QUESTION_KEY_PREFIX: &str = "custom_form_question_";

/// Fixed base columns of the circles grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseColumn {
    /// Circle identifier
    Id,
    /// Circle name
    Name,
    /// Phonetic reading of the name
    NameYomi,
    /// Group name
    GroupName,
    /// Phonetic reading of the group name
    GroupNameYomi,
    /// Attached tags
    Tags,
    /// Submission timestamp
    SubmittedAt,
    /// Review status
    Status,
    /// When the status was set
    StatusSetAt,
    /// Reviewer who set the status
    StatusSetBy,
    /// Staff notes
    Notes,
    /// Row creation time
    CreatedAt,
    /// Row update time
    UpdatedAt,
}

impl BaseColumn {
    /// Columns rendered before the custom-form block
    pub const PREFIX: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::NameYomi,
        Self::GroupName,
        Self::GroupNameYomi,
        Self::Tags,
    ];

    /// Columns rendered after the custom-form block
    pub const SUFFIX: [Self; 7] = [
        Self::SubmittedAt,
        Self::Status,
        Self::StatusSetAt,
        Self::StatusSetBy,
        Self::Notes,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Base columns the store selects for every grid fetch
    ///
    /// Also the sortable set: every base column except `tags`, which has no
    /// scalar representation to order by.
    pub const SELECT: [&'static str; 12] = [
        "id",
        "name",
        "name_yomi",
        "group_name",
        "group_name_yomi",
        "submitted_at",
        "status",
        "status_set_at",
        "status_set_by",
        "notes",
        "created_at",
        "updated_at",
    ];

    /// Column key as the renderer sees it
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::NameYomi => "name_yomi",
            Self::GroupName => "group_name",
            Self::GroupNameYomi => "group_name_yomi",
            Self::Tags => "tags",
            Self::SubmittedAt => "submitted_at",
            Self::Status => "status",
            Self::StatusSetAt => "status_set_at",
            Self::StatusSetBy => "status_set_by",
            Self::Notes => "notes",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Where a column's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// A fixed circle field
    Base(BaseColumn),
    /// An answer to one custom-form question
    Question(QuestionId),
}

/// One column of the composed grid schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Renderer-facing key
    pub key: String,
    /// Value source
    pub source: ColumnSource,
}

impl ColumnDescriptor {
    fn base(column: BaseColumn) -> Self {
        Self {
            key: column.key().to_string(),
            source: ColumnSource::Base(column),
        }
    }

    fn question(id: QuestionId) -> Self {
        Self {
            key: question_key(id),
            source: ColumnSource::Question(id),
        }
    }
}

/// Key of the synthetic column for one question
#[inline]
#[must_use]
pub fn question_key(id: QuestionId) -> String {
    format!("{CUSTOM_QUESTION_KEY_PREFIX}{id}")
}

/// Compose the full ordered schema: prefix, form questions, suffix
///
/// With no resolved form the dynamic block is empty and the schema collapses
/// to prefix ++ suffix.
#[must_use]
pub fn compose(form: Option<&CustomForm>) -> Vec<ColumnDescriptor> {
    let questions = form.map(|f| f.questions.as_slice()).unwrap_or_default();

    BaseColumn::PREFIX
        .iter()
        .copied()
        .map(ColumnDescriptor::base)
        .chain(questions.iter().map(|q| ColumnDescriptor::question(q.id)))
        .chain(BaseColumn::SUFFIX.iter().copied().map(ColumnDescriptor::base))
        .collect()
}
