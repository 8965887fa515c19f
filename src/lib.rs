pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{content_service::ContentService, question_service::QuestionService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub question_service: QuestionService,
    pub content_service: ContentService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let question_service = QuestionService::new(pool.clone());
        let content_service = ContentService::new(pool.clone());

        Self {
            pool,
            question_service,
            content_service,
        }
    }
}
