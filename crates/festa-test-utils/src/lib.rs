//! Shared fixtures for the Festa workspace
//!
//! Seeded stores and sample entities used by the grid test suites and the
//! admin preview binary.

#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveDateTime};
use festa_model::{
    AnswerDetail, AnswerId, Circle, CircleId, CircleStatus, CustomForm, FormAnswer, FormId,
    QuestionId, QuestionType, Tag, TagId, User, UserId,
};
use festa_store::MemoryStore;

pub const SAMPLE_FORM_ID: FormId = FormId::new(4);
pub const TEXT_QUESTION_ID: QuestionId = QuestionId::new(5);
pub const UPLOAD_QUESTION_ID: QuestionId = QuestionId::new(6);
pub const REVIEWER_ID: UserId = UserId::new(3);

pub fn dt(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// The active "circle" form: one text question, one upload question
pub fn sample_form() -> CustomForm {
    CustomForm::new(SAMPLE_FORM_ID, "circle", "Circle entry form")
        .with_question(QuestionType::Text, TEXT_QUESTION_ID, "Activity summary")
        .with_question(QuestionType::Upload, UPLOAD_QUESTION_ID, "Floor plan")
}

pub fn sample_reviewer() -> User {
    User::new(REVIEWER_ID, "19A1234", "山田", "太郎")
        .with_contact("reviewer@example.com", "000-0000-0000")
        .staff()
}

/// A submitted circle with readings, timestamps, and an approved status
pub fn submitted_circle(id: i64, name: &str) -> Circle {
    Circle::new(CircleId::new(id), name, format!("{name} Group"))
        .with_yomi(format!("{name} yomi"), format!("{name} group yomi"))
        .submitted(dt(2, 10))
        .with_status(CircleStatus::Approved, dt(3, 10), REVIEWER_ID)
        .with_notes("checked")
        .with_timestamps(dt(1, 9), dt(3, 9))
}

/// Store with the sample form and `rows` fully-answered submitted circles
///
/// Every circle carries both tags and one answer with a text detail and an
/// upload detail; answer ids are `100 + circle id`.
pub fn seeded_store(rows: i64) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_form(sample_form());
    store.insert_user(sample_reviewer());
    store.insert_tag(Tag::new(TagId::new(1), "food"));
    store.insert_tag(Tag::new(TagId::new(2), "music"));

    for id in 1..=rows {
        store.insert_circle(submitted_circle(id, &format!("Circle {id}")));
        store.attach_tag(CircleId::new(id), TagId::new(1));
        store.attach_tag(CircleId::new(id), TagId::new(2));

        let answer_id = AnswerId::new(100 + id);
        store.insert_answer(
            FormAnswer::new(answer_id, CircleId::new(id), SAMPLE_FORM_ID),
            vec![
                AnswerDetail::with_value(answer_id, TEXT_QUESTION_ID, format!("summary {id}")),
                AnswerDetail::uploaded(answer_id, UPLOAD_QUESTION_ID),
            ],
        );
    }

    store
}

/// Store with submitted circles but no custom form configured
pub fn store_without_form(rows: i64) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_user(sample_reviewer());
    for id in 1..=rows {
        store.insert_circle(submitted_circle(id, &format!("Circle {id}")));
    }
    store
}
