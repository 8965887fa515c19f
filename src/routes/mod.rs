pub mod health;
pub mod questions;
pub mod website_content;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

/// The full API surface. State and layers are attached by the caller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/questions",
            get(questions::get_questions).post(questions::create_question),
        )
        // Static segments must be registered alongside the `:id` routes;
        // the router prefers them over the parameter match.
        .route("/api/questions/reorder", put(questions::reorder_questions))
        .route(
            "/api/questions/seed-questions",
            post(questions::seed_questions),
        )
        .route(
            "/api/questions/categories/list",
            get(questions::get_question_categories),
        )
        .route(
            "/api/questions/:id",
            get(questions::get_question)
                .put(questions::update_question)
                .delete(questions::delete_question),
        )
        .route(
            "/api/website-content/hero-slides",
            get(website_content::get_hero_slides).post(website_content::create_hero_slide),
        )
        .route(
            "/api/website-content/hero-slides/:id",
            put(website_content::update_hero_slide).delete(website_content::delete_hero_slide),
        )
        .route(
            "/api/website-content/products",
            get(website_content::get_products).post(website_content::create_product),
        )
        .route(
            "/api/website-content/products/:id",
            put(website_content::update_product).delete(website_content::delete_product),
        )
        .route(
            "/api/website-content/testimonials",
            get(website_content::get_testimonials).post(website_content::create_testimonial),
        )
        .route(
            "/api/website-content/testimonials/:id",
            put(website_content::update_testimonial).delete(website_content::delete_testimonial),
        )
        .route(
            "/api/website-content/activities",
            get(website_content::get_activities).post(website_content::create_activity),
        )
        .route(
            "/api/website-content/activities/:id",
            put(website_content::update_activity).delete(website_content::delete_activity),
        )
        .route(
            "/api/website-content/section-images",
            get(website_content::get_section_images).post(website_content::upsert_section_image),
        )
        .route(
            "/api/website-content/section-images/:section_name",
            get(website_content::get_section_image),
        )
        .route(
            "/api/website-content/seed-defaults",
            post(website_content::seed_default_content),
        )
}
