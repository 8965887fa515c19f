use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::patch::Patch;
use crate::models::question::{Question, QuestionOption};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QuestionListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    #[serde(rename = "testType")]
    pub test_type: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionPayload {
    #[validate(length(min = 1))]
    pub text: String,
    pub question: Option<String>,
    #[validate(length(min = 1))]
    pub category: String,
    /// Answer options; a question needs at least two.
    #[validate(length(min = 2))]
    pub options: Vec<QuestionOption>,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_free: bool,
}

/// Sparse patch: absent fields stay unchanged, explicit `null` is rejected
/// because no question field is nullable.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateQuestionPayload {
    pub text: Patch<String>,
    pub question: Patch<String>,
    pub category: Patch<String>,
    pub options: Patch<Vec<QuestionOption>>,
    #[serde(rename = "order")]
    pub sort_order: Patch<i32>,
    pub is_free: Patch<bool>,
    pub is_active: Patch<bool>,
}

/// One entry of the reorder payload. Legacy admin builds send `questionId`,
/// newer ones send `id`; either is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderItem {
    pub id: Option<String>,
    #[serde(rename = "questionId")]
    pub question_id: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl ReorderItem {
    pub fn raw_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.question_id.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: Uuid,
    pub text: Option<String>,
    pub question: Option<String>,
    pub category: String,
    pub options: Vec<QuestionOption>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_free: bool,
    pub is_active: Option<bool>,
    pub test_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        let test_type = q.test_type().to_string();
        // Old rows only carry the legacy `question` field.
        let text = q.text.or_else(|| q.question.clone());
        Self {
            id: q.id,
            text,
            question: q.question,
            category: q.category,
            options: q.options.0,
            sort_order: q.sort_order,
            is_free: q.is_free,
            is_active: q.is_active,
            test_type,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn question(is_free: bool, text: Option<&str>, legacy: Option<&str>) -> Question {
        Question {
            id: Uuid::new_v4(),
            text: text.map(str::to_string),
            question: legacy.map(str::to_string),
            category: "personality".into(),
            options: Json(vec![
                QuestionOption {
                    text: "Ya".into(),
                    value: "A".into(),
                    score: 1,
                },
                QuestionOption {
                    text: "Tidak".into(),
                    value: "B".into(),
                    score: 2,
                },
            ]),
            sort_order: 1,
            is_free,
            is_active: Some(true),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_type_derived_from_is_free() {
        let free = QuestionResponse::from(question(true, Some("q"), None));
        assert_eq!(free.test_type, "free");
        let paid = QuestionResponse::from(question(false, Some("q"), None));
        assert_eq!(paid.test_type, "paid");
    }

    #[test]
    fn text_backfilled_from_legacy_question_field() {
        let resp = QuestionResponse::from(question(true, None, Some("legacy wording")));
        assert_eq!(resp.text.as_deref(), Some("legacy wording"));
        assert_eq!(resp.question.as_deref(), Some("legacy wording"));
    }

    #[test]
    fn reorder_item_accepts_both_id_keys() {
        let a: ReorderItem = serde_json::from_str(r#"{"id": "abc", "order": 3}"#).unwrap();
        assert_eq!(a.raw_id(), Some("abc"));
        assert_eq!(a.order, 3);

        let b: ReorderItem = serde_json::from_str(r#"{"questionId": "def"}"#).unwrap();
        assert_eq!(b.raw_id(), Some("def"));
        assert_eq!(b.order, 0);

        let c: ReorderItem = serde_json::from_str(r#"{"order": 1}"#).unwrap();
        assert_eq!(c.raw_id(), None);
    }

    #[test]
    fn update_payload_distinguishes_absent_from_null() {
        let p: UpdateQuestionPayload =
            serde_json::from_str(r#"{"category": "talent", "order": null}"#).unwrap();
        assert_eq!(p.category.value(), Some(&"talent".to_string()));
        assert!(p.sort_order.is_null());
        assert!(p.text.is_missing());
    }
}
