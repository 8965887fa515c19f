use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::content_dto::{
        ActivityContent, ProductContent, SectionImagePayload, SlideContent, TestimonialContent,
    },
    error::{Error, Result},
    AppState,
};

fn parse_id(raw: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::BadRequest(format!("Invalid {} ID", what)))
}

// Hero slides

#[utoipa::path(
    get,
    path = "/api/website-content/hero-slides",
    responses((status = 200, description = "Active slides, order ascending"))
)]
#[axum::debug_handler]
pub async fn get_hero_slides(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let slides = state.content_service.list_hero_slides().await?;
    Ok(Json(slides))
}

#[utoipa::path(
    post,
    path = "/api/website-content/hero-slides",
    request_body = SlideContent,
    responses((status = 200, description = "Slide created"))
)]
#[axum::debug_handler]
pub async fn create_hero_slide(
    State(state): State<AppState>,
    Json(slide): Json<SlideContent>,
) -> Result<impl IntoResponse> {
    slide.validate()?;
    let id = state.content_service.create_hero_slide(&slide).await?;
    Ok(Json(json!({ "id": id, "message": "Slide created successfully" })))
}

#[utoipa::path(
    put,
    path = "/api/website-content/hero-slides/{id}",
    params(("id" = String, Path, description = "Slide ID")),
    request_body = SlideContent,
    responses(
        (status = 200, description = "Slide replaced"),
        (status = 404, description = "Slide not found")
    )
)]
#[axum::debug_handler]
pub async fn update_hero_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(slide): Json<SlideContent>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "slide")?;
    slide.validate()?;
    state.content_service.update_hero_slide(id, &slide).await?;
    Ok(Json(json!({ "message": "Slide updated successfully" })))
}

#[utoipa::path(
    delete,
    path = "/api/website-content/hero-slides/{id}",
    params(("id" = String, Path, description = "Slide ID")),
    responses(
        (status = 200, description = "Slide deleted"),
        (status = 404, description = "Slide not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_hero_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "slide")?;
    state.content_service.delete_hero_slide(id).await?;
    Ok(Json(json!({ "message": "Slide deleted successfully" })))
}

// Products

#[utoipa::path(
    get,
    path = "/api/website-content/products",
    responses((status = 200, description = "Active products, order ascending"))
)]
#[axum::debug_handler]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = state.content_service.list_products().await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/api/website-content/products",
    request_body = ProductContent,
    responses((status = 200, description = "Product created"))
)]
#[axum::debug_handler]
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<ProductContent>,
) -> Result<impl IntoResponse> {
    product.validate()?;
    let id = state.content_service.create_product(&product).await?;
    Ok(Json(json!({ "id": id, "message": "Product created successfully" })))
}

#[utoipa::path(
    put,
    path = "/api/website-content/products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    request_body = ProductContent,
    responses(
        (status = 200, description = "Product replaced"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(product): Json<ProductContent>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "product")?;
    product.validate()?;
    state.content_service.update_product(id, &product).await?;
    Ok(Json(json!({ "message": "Product updated successfully" })))
}

#[utoipa::path(
    delete,
    path = "/api/website-content/products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "product")?;
    state.content_service.delete_product(id).await?;
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

// Testimonials

#[utoipa::path(
    get,
    path = "/api/website-content/testimonials",
    responses((status = 200, description = "Active testimonials, order ascending"))
)]
#[axum::debug_handler]
pub async fn get_testimonials(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let testimonials = state.content_service.list_testimonials().await?;
    Ok(Json(testimonials))
}

#[utoipa::path(
    post,
    path = "/api/website-content/testimonials",
    request_body = TestimonialContent,
    responses((status = 200, description = "Testimonial created"))
)]
#[axum::debug_handler]
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(testimonial): Json<TestimonialContent>,
) -> Result<impl IntoResponse> {
    testimonial.validate()?;
    let id = state.content_service.create_testimonial(&testimonial).await?;
    Ok(Json(json!({ "id": id, "message": "Testimonial created successfully" })))
}

#[utoipa::path(
    put,
    path = "/api/website-content/testimonials/{id}",
    params(("id" = String, Path, description = "Testimonial ID")),
    request_body = TestimonialContent,
    responses(
        (status = 200, description = "Testimonial replaced"),
        (status = 404, description = "Testimonial not found")
    )
)]
#[axum::debug_handler]
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(testimonial): Json<TestimonialContent>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "testimonial")?;
    testimonial.validate()?;
    state
        .content_service
        .update_testimonial(id, &testimonial)
        .await?;
    Ok(Json(json!({ "message": "Testimonial updated successfully" })))
}

#[utoipa::path(
    delete,
    path = "/api/website-content/testimonials/{id}",
    params(("id" = String, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Testimonial deleted"),
        (status = 404, description = "Testimonial not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "testimonial")?;
    state.content_service.delete_testimonial(id).await?;
    Ok(Json(json!({ "message": "Testimonial deleted successfully" })))
}

// Activities

#[utoipa::path(
    get,
    path = "/api/website-content/activities",
    responses((status = 200, description = "Active activities, order ascending"))
)]
#[axum::debug_handler]
pub async fn get_activities(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let activities = state.content_service.list_activities().await?;
    Ok(Json(activities))
}

#[utoipa::path(
    post,
    path = "/api/website-content/activities",
    request_body = ActivityContent,
    responses((status = 200, description = "Activity created"))
)]
#[axum::debug_handler]
pub async fn create_activity(
    State(state): State<AppState>,
    Json(activity): Json<ActivityContent>,
) -> Result<impl IntoResponse> {
    activity.validate()?;
    let id = state.content_service.create_activity(&activity).await?;
    Ok(Json(json!({ "id": id, "message": "Activity created successfully" })))
}

#[utoipa::path(
    put,
    path = "/api/website-content/activities/{id}",
    params(("id" = String, Path, description = "Activity ID")),
    request_body = ActivityContent,
    responses(
        (status = 200, description = "Activity replaced"),
        (status = 404, description = "Activity not found")
    )
)]
#[axum::debug_handler]
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(activity): Json<ActivityContent>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "activity")?;
    activity.validate()?;
    state.content_service.update_activity(id, &activity).await?;
    Ok(Json(json!({ "message": "Activity updated successfully" })))
}

#[utoipa::path(
    delete,
    path = "/api/website-content/activities/{id}",
    params(("id" = String, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Activity deleted"),
        (status = 404, description = "Activity not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&id, "activity")?;
    state.content_service.delete_activity(id).await?;
    Ok(Json(json!({ "message": "Activity deleted successfully" })))
}

// Section images

#[utoipa::path(
    get,
    path = "/api/website-content/section-images",
    responses((status = 200, description = "All section images"))
)]
#[axum::debug_handler]
pub async fn get_section_images(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let images = state.content_service.list_section_images().await?;
    Ok(Json(images))
}

#[utoipa::path(
    get,
    path = "/api/website-content/section-images/{section_name}",
    params(("section_name" = String, Path, description = "Section name, e.g. about-main")),
    responses((status = 200, description = "Section image, or null when absent"))
)]
#[axum::debug_handler]
pub async fn get_section_image(
    State(state): State<AppState>,
    Path(section_name): Path<String>,
) -> Result<impl IntoResponse> {
    // A missing section image is an expected state for the front end,
    // so this returns null instead of 404.
    let image = state.content_service.get_section_image(&section_name).await?;
    Ok(Json(image))
}

#[utoipa::path(
    post,
    path = "/api/website-content/section-images",
    request_body = SectionImagePayload,
    responses((status = 200, description = "Section image inserted or replaced"))
)]
#[axum::debug_handler]
pub async fn upsert_section_image(
    State(state): State<AppState>,
    Json(image): Json<SectionImagePayload>,
) -> Result<impl IntoResponse> {
    image.validate()?;
    state.content_service.upsert_section_image(&image).await?;
    Ok(Json(json!({ "message": "Section image saved successfully" })))
}

// Seeding

#[utoipa::path(
    post,
    path = "/api/website-content/seed-defaults",
    responses((status = 200, description = "Defaults inserted, or a no-op when content exists"))
)]
#[axum::debug_handler]
pub async fn seed_default_content(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let seeded = state.content_service.seed_defaults().await?;
    let message = if seeded {
        "Default content seeded successfully"
    } else {
        "Data already exists"
    };
    Ok(Json(json!({ "message": message, "seeded": seeded })))
}
