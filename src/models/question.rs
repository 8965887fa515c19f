use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A quiz question as stored in the catalog.
///
/// `text` is the current question text; `question` is the legacy field name
/// still present on old rows. `is_active` is NULL for rows created before
/// the flag existed and such rows count as active.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub text: Option<String>,
    pub question: Option<String>,
    pub category: String,
    pub options: Json<Vec<QuestionOption>>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_free: bool,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Tier label derived from `is_free`, returned to clients as `testType`.
    pub fn test_type(&self) -> &'static str {
        if self.is_free {
            "free"
        } else {
            "paid"
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionOption {
    pub text: String,
    /// Single-letter answer code, "A".."D".
    pub value: String,
    pub score: i32,
}
