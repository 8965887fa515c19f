use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::patch::Patch;
use crate::dto::question_dto::{
    CreateQuestionPayload, QuestionListQuery, ReorderItem, UpdateQuestionPayload,
};
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::services::seed_data;

const COLUMNS: &str =
    "id, text, question, category, options, sort_order, is_free, is_active, created_at, updated_at";

/// Returned to clients when the catalog has no rows yet.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["personality", "talent", "skills", "interest"];

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

pub struct ReseedSummary {
    pub free_count: usize,
    pub paid_count: usize,
    pub total: usize,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: QuestionListQuery) -> Result<Vec<Question>> {
        let skip = query.skip.unwrap_or(0).max(0);
        let limit = query.limit.unwrap_or(100).max(1);

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM questions"));
        let mut has_condition = false;
        let mut separator = |builder: &mut QueryBuilder<Postgres>| {
            builder.push(if has_condition { " AND " } else { " WHERE " });
            has_condition = true;
        };

        if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
            separator(&mut builder);
            builder.push("category = ").push_bind(category.to_string());
        }
        match query.is_active {
            // NULL means the row predates the flag and counts as active.
            Some(true) => {
                separator(&mut builder);
                builder.push("(is_active IS TRUE OR is_active IS NULL)");
            }
            Some(false) => {
                separator(&mut builder);
                builder.push("is_active IS FALSE");
            }
            None => {}
        }
        match query.test_type.as_deref() {
            Some("free") => {
                separator(&mut builder);
                builder.push("is_free = TRUE");
            }
            Some("paid") => {
                separator(&mut builder);
                builder.push("is_free = FALSE");
            }
            _ => {}
        }

        builder
            .push(" ORDER BY sort_order ASC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(skip);

        let items = builder
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Question> {
        let question =
            sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| Error::NotFound("Question not found".to_string()))?;
        Ok(question)
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO questions
                (text, question, category, options, sort_order, is_free, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(&payload.text)
        .bind(&payload.question)
        .bind(&payload.category)
        .bind(Json(&payload.options))
        .bind(payload.sort_order)
        .bind(payload.is_free)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Sparse patch: only fields present in the payload are written. An
    /// explicit `null` is rejected since every question column involved is
    /// non-nullable.
    pub async fn update(&self, id: Uuid, payload: UpdateQuestionPayload) -> Result<()> {
        let mut builder =
            QueryBuilder::<Postgres>::new("UPDATE questions SET updated_at = NOW()");

        match payload.text {
            Patch::Value(text) => {
                builder.push(", text = ").push_bind(text);
            }
            Patch::Null => return Err(Error::BadRequest("Field 'text' cannot be null".into())),
            Patch::Missing => {}
        }
        match payload.question {
            Patch::Value(question) => {
                builder.push(", question = ").push_bind(question);
            }
            Patch::Null => {
                return Err(Error::BadRequest("Field 'question' cannot be null".into()))
            }
            Patch::Missing => {}
        }
        match payload.category {
            Patch::Value(category) => {
                builder.push(", category = ").push_bind(category);
            }
            Patch::Null => {
                return Err(Error::BadRequest("Field 'category' cannot be null".into()))
            }
            Patch::Missing => {}
        }
        match payload.options {
            Patch::Value(options) => {
                if options.len() < 2 {
                    return Err(Error::BadRequest(
                        "A question needs at least two options".into(),
                    ));
                }
                builder.push(", options = ").push_bind(Json(options));
            }
            Patch::Null => return Err(Error::BadRequest("Field 'options' cannot be null".into())),
            Patch::Missing => {}
        }
        match payload.sort_order {
            Patch::Value(order) => {
                builder.push(", sort_order = ").push_bind(order);
            }
            Patch::Null => return Err(Error::BadRequest("Field 'order' cannot be null".into())),
            Patch::Missing => {}
        }
        match payload.is_free {
            Patch::Value(is_free) => {
                builder.push(", is_free = ").push_bind(is_free);
            }
            Patch::Null => return Err(Error::BadRequest("Field 'isFree' cannot be null".into())),
            Patch::Missing => {}
        }
        match payload.is_active {
            Patch::Value(is_active) => {
                builder.push(", is_active = ").push_bind(is_active);
            }
            Patch::Null => {
                return Err(Error::BadRequest("Field 'isActive' cannot be null".into()))
            }
            Patch::Missing => {}
        }

        builder.push(" WHERE id = ").push_bind(id);
        let result = builder.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Question not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Question not found".to_string()));
        }
        Ok(())
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        let categories: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT category FROM questions ORDER BY category")
                .fetch_all(&self.pool)
                .await?;
        if categories.is_empty() {
            return Ok(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect());
        }
        Ok(categories)
    }

    /// Applies each item independently; entries with a missing or malformed
    /// id are skipped silently. Not transactional.
    pub async fn reorder(&self, items: Vec<ReorderItem>) -> Result<()> {
        for item in items {
            let Some(raw) = item.raw_id() else { continue };
            let Ok(id) = Uuid::parse_str(raw) else {
                continue;
            };
            sqlx::query("UPDATE questions SET sort_order = $1 WHERE id = $2")
                .bind(item.order)
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Drops the whole catalog and reinserts the fixed 30-question set.
    /// Delete and inserts are separate statements; a concurrent list can
    /// observe a partially filled catalog.
    pub async fn reseed(&self) -> Result<ReseedSummary> {
        sqlx::query("DELETE FROM questions")
            .execute(&self.pool)
            .await?;

        let questions = seed_data::default_questions();
        let free_count = questions.iter().filter(|q| q.is_free).count();
        let total = questions.len();

        for q in &questions {
            sqlx::query(
                r#"
                INSERT INTO questions
                    (text, question, category, options, sort_order, is_free, is_active, created_at, updated_at)
                VALUES ($1, $1, $2, $3, $4, $5, TRUE, NOW(), NOW())
                "#,
            )
            .bind(q.text)
            .bind(q.category)
            .bind(Json(&q.options))
            .bind(q.sort_order)
            .bind(q.is_free)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!(total, free_count, "question catalog reseeded");
        Ok(ReseedSummary {
            free_count,
            paid_count: total - free_count,
            total,
        })
    }
}
