use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::question_dto::{
        CreateQuestionPayload, QuestionListQuery, QuestionResponse, ReorderItem,
        UpdateQuestionPayload,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    AppState,
};

fn parse_question_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::BadRequest("Invalid question ID".to_string()))
}

#[utoipa::path(
    get,
    path = "/api/questions",
    params(
        ("skip" = Option<i64>, Query, description = "Records to skip"),
        ("limit" = Option<i64>, Query, description = "Maximum records to return"),
        ("category" = Option<String>, Query, description = "Exact category match"),
        ("testType" = Option<String>, Query, description = "free or paid"),
        ("isActive" = Option<bool>, Query, description = "Visibility filter")
    ),
    responses(
        (status = 200, description = "Questions sorted by order ascending")
    )
)]
#[axum::debug_handler]
pub async fn get_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionListQuery>,
) -> Result<impl IntoResponse> {
    let questions = state.question_service.list(query).await?;
    let body: Vec<QuestionResponse> = questions.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    params(("id" = String, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question found"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_question_id(&id)?;
    let question = state.question_service.get_by_id(id).await?;
    Ok(Json(QuestionResponse::from(question)))
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    _claims: Claims,
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let id = state.question_service.create(payload).await?;
    Ok(Json(json!({
        "success": true,
        "questionId": id,
        "message": "Question created successfully"
    })))
}

#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    params(("id" = String, Path, description = "Question ID")),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question updated"),
        (status = 400, description = "Malformed ID or payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    _claims: Claims,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_question_id(&id)?;
    state.question_service.update(id, payload).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Question updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    params(("id" = String, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    _claims: Claims,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_question_id(&id)?;
    state.question_service.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Question deleted successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/api/questions/categories/list",
    responses((status = 200, description = "Distinct categories, or the default set when empty"))
)]
#[axum::debug_handler]
pub async fn get_question_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.question_service.categories().await?;
    Ok(Json(categories))
}

#[utoipa::path(
    put,
    path = "/api/questions/reorder",
    request_body = Vec<ReorderItem>,
    responses(
        (status = 200, description = "Order values applied; invalid entries skipped"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn reorder_questions(
    _claims: Claims,
    State(state): State<AppState>,
    Json(items): Json<Vec<ReorderItem>>,
) -> Result<impl IntoResponse> {
    state.question_service.reorder(items).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Questions reordered successfully"
    })))
}

#[utoipa::path(
    post,
    path = "/api/questions/seed-questions",
    responses((status = 200, description = "Catalog replaced with the fixed question set"))
)]
#[axum::debug_handler]
pub async fn seed_questions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let summary = state.question_service.reseed().await?;
    Ok(Json(json!({
        "message": "Questions seeded successfully",
        "free_count": summary.free_count,
        "paid_count": summary.paid_count,
        "total": summary.total
    })))
}
