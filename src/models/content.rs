use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub badge: String,
    pub image_url: String,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteProduct {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub link: String,
    pub badge: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub organization: String,
    pub role: String,
    pub image_url: String,
    pub text: String,
    pub rating: i32,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub link: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// One image per named page section ("about-main", "services-corporate", ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SectionImage {
    pub id: Uuid,
    pub section_name: String,
    pub image_url: String,
    pub alt_text: String,
    pub created_at: Option<DateTime<Utc>>,
}
