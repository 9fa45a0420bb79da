//! Hydrated rows returned by circle fetches
//!
//! One [`CircleRecord`] carries everything a grid row needs, attached by the
//! store during hydration so rendering never goes back to the store.

use festa_model::{AnswerDetail, Circle, FormAnswer, Question, Tag, User};
use serde::Serialize;

/// One answered question together with the question it answers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerDetailRecord {
    /// The detail row
    pub detail: AnswerDetail,
    /// The owning question, eager-loaded alongside the detail
    pub question: Question,
}

/// One answer row together with its details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormAnswerRecord {
    /// The answer row
    pub answer: FormAnswer,
    /// Details in question order
    pub details: Vec<AnswerDetailRecord>,
}

/// A circle plus every relation the grid reads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleRecord {
    /// The registration record
    pub circle: Circle,
    /// Attached tags
    pub tags: Vec<Tag>,
    /// Eager-loaded answers (scoped per the query's [`AnswersLoad`])
    pub answers: Vec<FormAnswerRecord>,
    /// The reviewer behind `status_set_by`, resolved during hydration
    pub status_set_by: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use festa_model::{AnswerId, CircleId, FormId, QuestionId, QuestionType};

    #[test]
    fn record_serializes_nested_relations() {
        let record = CircleRecord {
            circle: Circle::new(CircleId::new(1), "Foo", "Foo Group"),
            tags: vec![Tag::new(festa_model::TagId::new(2), "food")],
            answers: vec![FormAnswerRecord {
                answer: FormAnswer::new(AnswerId::new(9), CircleId::new(1), FormId::new(4)),
                details: vec![AnswerDetailRecord {
                    detail: AnswerDetail::with_value(AnswerId::new(9), QuestionId::new(5), "bar"),
                    question: Question::new(
                        QuestionId::new(5),
                        FormId::new(4),
                        QuestionType::Text,
                        "Activity summary",
                    ),
                }],
            }],
            status_set_by: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["tags"][0]["name"], "food");
        assert_eq!(value["answers"][0]["details"][0]["detail"]["value"], "bar");
    }
}
