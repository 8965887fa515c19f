use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

fn default_rating() -> i32 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    #[validate(length(min = 1))]
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub badge: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductContent {
    #[validate(length(min = 1))]
    pub title: String,
    pub subtitle: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    pub link: String,
    #[serde(default)]
    pub badge: String,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialContent {
    #[validate(length(min = 1))]
    pub name: String,
    pub organization: String,
    pub role: String,
    pub image_url: String,
    #[validate(length(min = 1))]
    pub text: String,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityContent {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    pub link: String,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SectionImagePayload {
    /// Natural key, e.g. "about-main" or "services-corporate".
    #[validate(length(min = 1))]
    pub section_name: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[serde(default)]
    pub alt_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_defaults_apply() {
        let slide: SlideContent = serde_json::from_str(
            r#"{
                "title": "COMPANY PROFILE",
                "subtitle": "NEWMECLASS",
                "description": "d",
                "badge": "b",
                "imageUrl": "https://example.com/x.jpg",
                "ctaText": "go",
                "ctaLink": "/"
            }"#,
        )
        .unwrap();
        assert_eq!(slide.sort_order, 0);
        assert!(slide.is_active);
    }

    #[test]
    fn testimonial_rating_defaults_to_five() {
        let t: TestimonialContent = serde_json::from_str(
            r#"{
                "name": "Siti",
                "organization": "Yayasan",
                "role": "Kepala Sekolah",
                "imageUrl": "https://example.com/p.jpg",
                "text": "Bagus sekali"
            }"#,
        )
        .unwrap();
        assert_eq!(t.rating, 5);
    }
}
