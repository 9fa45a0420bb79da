//! In-memory reference implementation of the store seams
//!
//! Backs the demo binary and the test suites. Every batch statement a real
//! backend would issue is counted in [`QueryStats`], so tests can assert that
//! hydrating a page costs a bounded constant number of statements no matter
//! how many rows or relation rows are involved.

use crate::error::StoreError;
use crate::query::{AnswersLoad, CircleQuery, SortDirection};
use crate::record::{AnswerDetailRecord, CircleRecord, FormAnswerRecord};
use crate::store::{CustomFormProvider, RecordStore};
use festa_model::{AnswerDetail, Circle, CircleId, CustomForm, FormAnswer, Tag, TagId, User};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// Counter of batch statements issued by a [`MemoryStore`]
#[derive(Debug, Default)]
pub struct QueryStats {
    statements: AtomicUsize,
}

impl QueryStats {
    /// Number of statements issued so far
    #[inline]
    #[must_use]
    pub fn statements(&self) -> usize {
        self.statements.load(AtomicOrdering::Relaxed)
    }

    /// Reset the counter
    #[inline]
    pub fn reset(&self) {
        self.statements.store(0, AtomicOrdering::Relaxed);
    }

    fn record(&self, n: usize) {
        self.statements.fetch_add(n, AtomicOrdering::Relaxed);
    }
}

/// In-memory store holding circles, tags, forms, answers, and users
#[derive(Debug, Default)]
pub struct MemoryStore {
    circles: Vec<Circle>,
    tags: Vec<Tag>,
    circle_tags: Vec<(CircleId, TagId)>,
    forms: Vec<CustomForm>,
    answers: Vec<FormAnswer>,
    details: Vec<AnswerDetail>,
    users: Vec<User>,
    stats: QueryStats,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a circle
    pub fn insert_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Insert a tag
    pub fn insert_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Attach a tag to a circle through the pivot
    pub fn attach_tag(&mut self, circle: CircleId, tag: TagId) {
        self.circle_tags.push((circle, tag));
    }

    /// Insert an active custom form
    pub fn insert_form(&mut self, form: CustomForm) {
        self.forms.push(form);
    }

    /// Insert an answer row together with its details
    pub fn insert_answer(&mut self, answer: FormAnswer, details: Vec<AnswerDetail>) {
        self.answers.push(answer);
        self.details.extend(details);
    }

    /// Insert a user
    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Statement counter
    #[inline]
    #[must_use]
    pub fn stats(&self) -> &QueryStats {
        &self.stats
    }

    fn tags_for(&self, circle: CircleId) -> Vec<Tag> {
        self.circle_tags
            .iter()
            .filter(|(c, _)| *c == circle)
            .filter_map(|(_, t)| self.tags.iter().find(|tag| tag.id == *t).cloned())
            .collect()
    }

    fn answers_for(&self, circle: CircleId, load: AnswersLoad) -> Vec<FormAnswerRecord> {
        let wanted: Vec<&FormAnswer> = match load {
            AnswersLoad::Skip => return Vec::new(),
            AnswersLoad::All => self
                .answers
                .iter()
                .filter(|a| a.circle_id == circle)
                .collect(),
            AnswersLoad::ForForm(form_id) => self
                .answers
                .iter()
                .filter(|a| a.circle_id == circle && a.form_id == form_id)
                .collect(),
        };

        wanted
            .into_iter()
            .map(|answer| FormAnswerRecord {
                answer: *answer,
                details: self
                    .details
                    .iter()
                    .filter(|d| d.answer_id == answer.id)
                    .filter_map(|d| {
                        self.question(d).map(|question| AnswerDetailRecord {
                            detail: d.clone(),
                            question,
                        })
                    })
                    .collect(),
            })
            .collect()
    }

    fn question(&self, detail: &AnswerDetail) -> Option<festa_model::Question> {
        self.forms
            .iter()
            .flat_map(|f| f.questions.iter())
            .find(|q| q.id == detail.question_id)
            .cloned()
    }

    fn sort(records: &mut [CircleRecord], key: &str, direction: SortDirection) -> Result<(), StoreError> {
        // Validate before sorting so an unknown key never half-orders a page.
        if !SORTABLE.contains(&key) {
            return Err(StoreError::UnsortableKey(key.to_string()));
        }
        records.sort_by(|a, b| {
            let ord = compare(&a.circle, &b.circle, key);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        Ok(())
    }
}

/// Keys the reference store can order by
const SORTABLE: [&str; 12] = [
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

fn compare(a: &Circle, b: &Circle, key: &str) -> Ordering {
    match key {
        "id" => a.id.cmp(&b.id),
        "name" => a.name.cmp(&b.name),
        "name_yomi" => a.name_yomi.cmp(&b.name_yomi),
        "group_name" => a.group_name.cmp(&b.group_name),
        "group_name_yomi" => a.group_name_yomi.cmp(&b.group_name_yomi),
        "submitted_at" => a.submitted_at.cmp(&b.submitted_at),
        "status" => a.status.cmp(&b.status),
        "status_set_at" => a.status_set_at.cmp(&b.status_set_at),
        "status_set_by" => a.status_set_by.cmp(&b.status_set_by),
        "notes" => a.notes.cmp(&b.notes),
        "created_at" => a.created_at.cmp(&b.created_at),
        "updated_at" => a.updated_at.cmp(&b.updated_at),
        // Unreachable: SORTABLE is checked before sorting.
        _ => Ordering::Equal,
    }
}

impl RecordStore for MemoryStore {
    fn fetch_circles(&self, query: &CircleQuery) -> Result<Vec<CircleRecord>, StoreError> {
        // Base select is always one statement.
        self.stats.record(1);

        let mut records: Vec<CircleRecord> = self
            .circles
            .iter()
            .filter(|c| !query.submitted_only || c.is_submitted())
            .map(|circle| CircleRecord {
                circle: circle.clone(),
                tags: Vec::new(),
                answers: Vec::new(),
                status_set_by: None,
            })
            .collect();

        if query.with_tags {
            // Pivot + tags resolve as one batch statement.
            self.stats.record(1);
            for record in &mut records {
                record.tags = self.tags_for(record.circle.id);
            }
        }

        if query.answers != AnswersLoad::Skip {
            // Answers, details, and owning questions: one batch each.
            self.stats.record(3);
            for record in &mut records {
                record.answers = self.answers_for(record.circle.id, query.answers);
            }
        }

        if records.iter().any(|r| r.circle.status_set_by.is_some()) {
            // Reviewers resolve as a single keyed batch.
            self.stats.record(1);
            for record in &mut records {
                record.status_set_by = record
                    .circle
                    .status_set_by
                    .and_then(|id| self.users.iter().find(|u| u.id == id).cloned());
            }
        }

        if let Some(order) = &query.order {
            Self::sort(&mut records, &order.key, order.direction)?;
        }

        tracing::debug!(
            rows = records.len(),
            statements = self.stats.statements(),
            "fetched circle page"
        );

        Ok(records)
    }

    fn all_tags(&self) -> Result<Vec<Tag>, StoreError> {
        self.stats.record(1);
        Ok(self.tags.clone())
    }
}

impl CustomFormProvider for MemoryStore {
    fn form_by_type(&self, form_type: &str) -> Result<Option<CustomForm>, StoreError> {
        self.stats.record(1);
        let mut matching = self.forms.iter().filter(|f| f.form_type == form_type);
        let first = matching.next();
        let extra = matching.count();
        if extra > 0 {
            return Err(StoreError::AmbiguousForm {
                form_type: form_type.to_string(),
                count: extra + 1,
            });
        }
        Ok(first.cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortOrder;
    use festa_model::{AnswerId, CircleStatus, FormId, QuestionId, QuestionType, UserId};
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn store_with_two_circles() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_circle(
            Circle::new(CircleId::new(1), "Foo", "Foo Group")
                .submitted(at(2, 10))
                .with_timestamps(at(1, 9), at(2, 9)),
        );
        store.insert_circle(Circle::new(CircleId::new(2), "Bar", "Bar Group"));
        store
    }

    #[test]
    fn submitted_scope_excludes_drafts() {
        let store = store_with_two_circles();
        let records = store
            .fetch_circles(&CircleQuery::new().submitted())
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].circle.id, CircleId::new(1));
    }

    #[test]
    fn unscoped_query_returns_drafts_too() {
        let store = store_with_two_circles();
        let records = store.fetch_circles(&CircleQuery::new()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn answers_load_is_constrained_to_form() {
        let mut store = store_with_two_circles();
        store.insert_form(
            CustomForm::new(FormId::new(4), "circle", "Entry form").with_question(
                QuestionType::Text,
                QuestionId::new(5),
                "Summary",
            ),
        );
        store.insert_form(
            CustomForm::new(FormId::new(8), "booth", "Booth form").with_question(
                QuestionType::Text,
                QuestionId::new(17),
                "Layout",
            ),
        );
        store.insert_answer(
            FormAnswer::new(AnswerId::new(9), CircleId::new(1), FormId::new(4)),
            vec![AnswerDetail::with_value(
                AnswerId::new(9),
                QuestionId::new(5),
                "bar",
            )],
        );
        store.insert_answer(
            FormAnswer::new(AnswerId::new(10), CircleId::new(1), FormId::new(8)),
            vec![AnswerDetail::with_value(
                AnswerId::new(10),
                QuestionId::new(17),
                "other form",
            )],
        );

        let records = store
            .fetch_circles(
                &CircleQuery::new()
                    .submitted()
                    .with_answers(Some(FormId::new(4))),
            )
            .unwrap();

        assert_eq!(records[0].answers.len(), 1);
        assert_eq!(records[0].answers[0].answer.id, AnswerId::new(9));
        assert_eq!(
            records[0].answers[0].details[0].question.question_type,
            QuestionType::Text
        );
    }

    #[test]
    fn reviewer_is_hydrated_from_users() {
        let mut store = MemoryStore::new();
        store.insert_user(User::new(UserId::new(3), "19A1234", "山田", "太郎").staff());
        store.insert_circle(
            Circle::new(CircleId::new(1), "Foo", "Foo Group")
                .submitted(at(2, 10))
                .with_status(CircleStatus::Approved, at(3, 10), UserId::new(3)),
        );

        let records = store
            .fetch_circles(&CircleQuery::new().submitted())
            .unwrap();
        let reviewer = records[0].status_set_by.as_ref().unwrap();
        assert_eq!(reviewer.id, UserId::new(3));
        assert!(reviewer.is_staff);
    }

    #[test]
    fn statement_count_is_independent_of_row_count() {
        let count_for = |rows: i64| {
            let mut store = MemoryStore::new();
            for i in 0..rows {
                store.insert_circle(
                    Circle::new(CircleId::new(i), format!("c{i}"), "g").submitted(at(2, 10)),
                );
            }
            let query = CircleQuery::new()
                .submitted()
                .with_tags()
                .with_answers(None);
            store.fetch_circles(&query).unwrap();
            store.stats().statements()
        };

        assert_eq!(count_for(1), count_for(50));
    }

    #[test]
    fn sorting_applies_direction() {
        let mut store = MemoryStore::new();
        for (id, name) in [(1, "b"), (2, "a"), (3, "c")] {
            store.insert_circle(Circle::new(CircleId::new(id), name, "g").submitted(at(2, 10)));
        }

        let records = store
            .fetch_circles(
                &CircleQuery::new()
                    .submitted()
                    .order_by(SortOrder::desc("name")),
            )
            .unwrap();
        let names: Vec<_> = records.iter().map(|r| r.circle.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        let store = store_with_two_circles();
        let result = store.fetch_circles(&CircleQuery::new().order_by(SortOrder::asc("tags")));
        assert!(matches!(result, Err(StoreError::UnsortableKey(k)) if k == "tags"));
    }

    #[test]
    fn ambiguous_form_configuration_is_rejected() {
        let mut store = MemoryStore::new();
        store.insert_form(CustomForm::new(FormId::new(1), "circle", "First"));
        store.insert_form(CustomForm::new(FormId::new(2), "circle", "Second"));

        let result = store.form_by_type("circle");
        assert!(matches!(
            result,
            Err(StoreError::AmbiguousForm { count: 2, .. })
        ));
    }

    #[test]
    fn missing_form_type_resolves_to_none() {
        let store = MemoryStore::new();
        assert!(store.form_by_type("circle").unwrap().is_none());
    }
}
