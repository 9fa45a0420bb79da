//! Query description for circle fetches
//!
//! [`CircleQuery`] is pure data: which columns to select, whether to restrict
//! to submitted registrations, which relations to eager-load, and an optional
//! ordering. Stores interpret it; nothing here executes anything.

use festa_model::FormId;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Ordering applied by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    /// Column key to order by
    pub key: String,
    /// Direction
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending order on a key
    #[inline]
    #[must_use]
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending order on a key
    #[inline]
    #[must_use]
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Eager-load instruction for form answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswersLoad {
    /// Do not load answers
    #[default]
    Skip,
    /// Load every answer row attached to each circle
    All,
    /// Load only answers belonging to one form; others are excluded at
    /// eager-load time, not after hydration
    ForForm(FormId),
}

/// Declarative description of one circle fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CircleQuery {
    /// Base columns the caller relies on
    pub select: Vec<String>,
    /// Restrict to records whose submission timestamp is set
    pub submitted_only: bool,
    /// Eager-load tags through the `circle_tag` pivot
    pub with_tags: bool,
    /// Eager-load answers (with details and their questions)
    pub answers: AnswersLoad,
    /// Optional ordering applied by the store
    pub order: Option<SortOrder>,
}

impl CircleQuery {
    /// Empty query: no scope, no eager loads
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to submitted registrations
    #[inline]
    #[must_use]
    pub fn submitted(mut self) -> Self {
        self.submitted_only = true;
        self
    }

    /// Select the given base columns
    #[must_use]
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Eager-load tags
    #[inline]
    #[must_use]
    pub fn with_tags(mut self) -> Self {
        self.with_tags = true;
        self
    }

    /// Eager-load answers, constrained to `form` when one is resolved
    #[inline]
    #[must_use]
    pub fn with_answers(mut self, form: Option<FormId>) -> Self {
        self.answers = match form {
            Some(id) => AnswersLoad::ForForm(id),
            None => AnswersLoad::All,
        };
        self
    }

    /// Order results
    #[inline]
    #[must_use]
    pub fn order_by(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }
}
