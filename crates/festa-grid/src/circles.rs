//! Circles grid source
//!
//! The staff-facing grid over submitted circle registrations. One instance
//! serves one request: the active `"circle"` custom form is resolved at
//! construction, and the tag filter's choice list is loaded at most once for
//! the instance's lifetime.

use crate::error::GridError;
use crate::filter::{FilterDescriptor, RelatedField, ScalarType};
use crate::routes::UploadUrls;
use crate::schema::{compose, BaseColumn, ColumnDescriptor, ColumnSource};
use crate::source::{GridPage, GridSource, Row};
use chrono::NaiveDateTime;
use festa_model::CustomForm;
use festa_store::{CircleQuery, CircleRecord, CustomFormProvider, RecordStore, SortOrder};
use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde_json::Value;
use std::sync::Arc;

/// Display format for review and row timestamps
const DATETIME_DISPLAY: &str = "%Y/%m/%d %H:%M:%S";

/// Configuration for the circles grid
#[derive(Debug, Clone)]
pub struct GridConfig {
    form_type: String,
}

impl GridConfig {
    /// Default configuration: resolve the `"circle"` form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a different form type
    #[inline]
    #[must_use]
    pub fn with_form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = form_type.into();
        self
    }

    /// The form type resolved at adapter construction
    #[inline]
    #[must_use]
    pub fn form_type(&self) -> &str {
        &self.form_type
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            form_type: "circle".to_string(),
        }
    }
}

/// Grid source for circle registrations
///
/// Request-scoped: construct one per grid request and discard it afterwards.
/// The memoized tag choices deliberately live and die with the instance so a
/// tag created between requests is always visible to the next request.
#[derive(Debug)]
pub struct CirclesGridSource {
    store: Arc<dyn RecordStore>,
    custom_form: Option<CustomForm>,
    columns: Vec<ColumnDescriptor>,
    tag_choices: OnceCell<Vec<Value>>,
    urls: UploadUrls,
}

impl CirclesGridSource {
    /// Build an adapter, resolving the active custom form once
    ///
    /// A missing form is normal: the grid simply has no dynamic columns. An
    /// ambiguous form configuration is surfaced as an error.
    pub fn new(
        config: &GridConfig,
        store: Arc<dyn RecordStore>,
        forms: &dyn CustomFormProvider,
    ) -> Result<Self, GridError> {
        let custom_form = forms.form_by_type(config.form_type())?;
        if let Some(form) = &custom_form {
            tracing::debug!(form = %form.id, questions = form.questions.len(), "resolved custom form");
        }
        let columns = compose(custom_form.as_ref());
        Ok(Self {
            store,
            custom_form,
            columns,
            tag_choices: OnceCell::new(),
            urls: UploadUrls::new(),
        })
    }

    /// With a custom upload URL builder
    #[inline]
    #[must_use]
    pub fn with_urls(mut self, urls: UploadUrls) -> Self {
        self.urls = urls;
        self
    }

    /// The custom form resolved at construction, if any
    #[inline]
    #[must_use]
    pub fn custom_form(&self) -> Option<&CustomForm> {
        self.custom_form.as_ref()
    }

    /// Fetch and map a full grid page
    ///
    /// Orderings are validated against `sortable_keys()` before reaching the
    /// store; custom-form columns are never sortable.
    pub fn render_page(&self, order: Option<SortOrder>) -> Result<GridPage, GridError> {
        let mut query = self.base_query();
        if let Some(order) = order {
            if !self.sortable_keys().iter().any(|k| *k == order.key) {
                return Err(GridError::UnknownColumn(order.key));
            }
            query = query.order_by(order);
        }

        let records = self.store.fetch_circles(&query)?;
        let rows = records
            .iter()
            .map(|record| self.map(record))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(rows = rows.len(), "rendered circles grid page");

        Ok(GridPage {
            keys: self.keys(),
            rows,
        })
    }

    /// Tag filter choices, loaded once per instance
    fn tag_choices(&self) -> Result<&[Value], GridError> {
        let choices = self.tag_choices.get_or_try_init(|| {
            let tags = self.store.all_tags()?;
            tags.iter()
                .map(|tag| serde_json::to_value(tag).map_err(GridError::from))
                .collect::<Result<Vec<_>, _>>()
        })?;
        Ok(choices)
    }

    /// Render one base column of one record
    fn base_value(&self, column: BaseColumn, record: &CircleRecord) -> Result<Value, GridError> {
        let circle = &record.circle;
        let value = match column {
            BaseColumn::Id => Value::from(circle.id.get()),
            BaseColumn::Name => Value::String(circle.name.clone()),
            BaseColumn::NameYomi => Value::String(circle.name_yomi.clone()),
            BaseColumn::GroupName => Value::String(circle.group_name.clone()),
            BaseColumn::GroupNameYomi => Value::String(circle.group_name_yomi.clone()),
            BaseColumn::Tags => serde_json::to_value(&record.tags)?,
            BaseColumn::SubmittedAt => serde_json::to_value(circle.submitted_at)?,
            BaseColumn::Status => serde_json::to_value(circle.status)?,
            BaseColumn::StatusSetAt => circle
                .status_set_at
                .map_or(Value::Null, |at| Value::String(format_datetime(at))),
            BaseColumn::StatusSetBy => serde_json::to_value(&record.status_set_by)?,
            BaseColumn::Notes => serde_json::to_value(&circle.notes)?,
            BaseColumn::CreatedAt => {
                let at = circle.created_at.ok_or(GridError::MissingTimestamp {
                    column: "created_at",
                    circle: circle.id,
                })?;
                Value::String(format_datetime(at))
            }
            BaseColumn::UpdatedAt => {
                let at = circle.updated_at.ok_or(GridError::MissingTimestamp {
                    column: "updated_at",
                    circle: circle.id,
                })?;
                Value::String(format_datetime(at))
            }
        };
        Ok(value)
    }
}

impl GridSource for CirclesGridSource {
    type Record = CircleRecord;
    type Query = CircleQuery;

    fn base_query(&self) -> CircleQuery {
        CircleQuery::new()
            .submitted()
            .select(BaseColumn::SELECT)
            .with_tags()
            .with_answers(self.custom_form.as_ref().map(|form| form.id))
    }

    fn keys(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.key.clone()).collect()
    }

    fn filterable_keys(&self) -> Result<IndexMap<String, FilterDescriptor>, GridError> {
        let tag_choices = self.tag_choices()?.to_vec();

        let mut keys = IndexMap::new();
        keys.insert("id".to_string(), FilterDescriptor::Number);
        keys.insert("name".to_string(), FilterDescriptor::String);
        keys.insert("name_yomi".to_string(), FilterDescriptor::String);
        keys.insert("group_name".to_string(), FilterDescriptor::String);
        keys.insert("group_name_yomi".to_string(), FilterDescriptor::String);
        keys.insert(
            "tags".to_string(),
            FilterDescriptor::BelongsToMany {
                pivot: "circle_tag".to_string(),
                foreign_key: "circle_id".to_string(),
                related_key: "tag_id".to_string(),
                choices: tag_choices,
                choices_name: "name".to_string(),
            },
        );
        keys.insert("submitted_at".to_string(), FilterDescriptor::Datetime);
        keys.insert(
            "status".to_string(),
            FilterDescriptor::Enum {
                choices: status_choices(),
            },
        );
        keys.insert("status_set_at".to_string(), FilterDescriptor::Datetime);
        keys.insert(
            "status_set_by".to_string(),
            FilterDescriptor::BelongsTo {
                to: "users".to_string(),
                keys: user_filter_fields(),
            },
        );
        keys.insert("notes".to_string(), FilterDescriptor::String);
        keys.insert("created_at".to_string(), FilterDescriptor::Datetime);
        keys.insert("updated_at".to_string(), FilterDescriptor::Datetime);
        Ok(keys)
    }

    fn sortable_keys(&self) -> Vec<String> {
        BaseColumn::SELECT.iter().map(ToString::to_string).collect()
    }

    fn map(&self, record: &CircleRecord) -> Result<Row, GridError> {
        let mut row = Row::new();

        // The eager load is already scoped to this form; matching on the
        // circle id again is a redundant second filter kept for defensive
        // correctness.
        let answer = record
            .answers
            .iter()
            .find(|a| a.answer.circle_id == record.circle.id);

        for column in &self.columns {
            match column.source {
                ColumnSource::Question(question_id) => {
                    let Some(answer) = answer else { continue };
                    let Some(detail) = answer
                        .details
                        .iter()
                        .find(|d| d.detail.question_id == question_id)
                    else {
                        continue;
                    };

                    let value = if detail.question.question_type.is_upload() {
                        serde_json::json!({
                            "file_url": self.urls.show(
                                answer.answer.form_id,
                                answer.answer.id,
                                question_id,
                            )
                        })
                    } else {
                        detail
                            .detail
                            .value
                            .clone()
                            .map_or(Value::Null, Value::String)
                    };
                    row.insert(column.key.clone(), value);
                }
                ColumnSource::Base(base) => {
                    row.insert(column.key.clone(), self.base_value(base, record)?);
                }
            }
        }

        Ok(row)
    }
}

fn format_datetime(at: NaiveDateTime) -> String {
    at.format(DATETIME_DISPLAY).to_string()
}

/// Status filter labels, keyed by stored value (`NULL` = still pending)
fn status_choices() -> IndexMap<String, String> {
    let mut choices = IndexMap::new();
    choices.insert("rejected".to_string(), "不受理".to_string());
    choices.insert("approved".to_string(), "受理".to_string());
    choices.insert("NULL".to_string(), "確認中".to_string());
    choices
}

/// Filterable fields of the related `users` resource, labels verbatim
fn user_filter_fields() -> IndexMap<String, RelatedField> {
    let mut fields = IndexMap::new();
    fields.insert(
        "id".to_string(),
        RelatedField::new("ユーザーID", ScalarType::Number),
    );
    fields.insert(
        "student_id".to_string(),
        RelatedField::new("学籍番号", ScalarType::String),
    );
    fields.insert(
        "name_family".to_string(),
        RelatedField::new("姓", ScalarType::String),
    );
    fields.insert(
        "name_family_yomi".to_string(),
        RelatedField::new("姓(よみ)", ScalarType::String),
    );
    fields.insert(
        "name_given".to_string(),
        RelatedField::new("名", ScalarType::String),
    );
    fields.insert(
        "name_given_yomi".to_string(),
        RelatedField::new("名(よみ)", ScalarType::String),
    );
    fields.insert(
        "email".to_string(),
        RelatedField::new("連絡先メールアドレス", ScalarType::String),
    );
    fields.insert(
        "tel".to_string(),
        RelatedField::new("電話番号", ScalarType::String),
    );
    fields.insert(
        "is_staff".to_string(),
        RelatedField::new("スタッフ", ScalarType::Bool),
    );
    fields.insert(
        "is_admin".to_string(),
        RelatedField::new("管理者", ScalarType::Bool),
    );
    fields.insert(
        "email_verified_at".to_string(),
        RelatedField::new("メール認証", ScalarType::IsNull),
    );
    fields.insert(
        "univemail_verified_at".to_string(),
        RelatedField::new("本人確認", ScalarType::IsNull),
    );
    fields.insert(
        "notes".to_string(),
        RelatedField::new("スタッフ用メモ", ScalarType::String),
    );
    fields.insert(
        "created_at".to_string(),
        RelatedField::new("作成日時", ScalarType::Datetime),
    );
    fields.insert(
        "updated_at".to_string(),
        RelatedField::new("更新日時", ScalarType::Datetime),
    );
    fields
}
