use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::content_dto::{
    ActivityContent, ProductContent, SectionImagePayload, SlideContent, TestimonialContent,
};
use crate::error::{Error, Result};
use crate::models::content::{Activity, HeroSlide, SectionImage, Testimonial, WebsiteProduct};
use crate::services::seed_data;

/// Active-only listings are capped at 100 records per collection.
const LIST_CAP: i64 = 100;

#[derive(Clone)]
pub struct ContentService {
    pool: PgPool,
}

impl ContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Hero slides

    pub async fn list_hero_slides(&self) -> Result<Vec<HeroSlide>> {
        let slides = sqlx::query_as::<_, HeroSlide>(
            r#"
            SELECT id, title, subtitle, description, badge, image_url, cta_text, cta_link,
                   sort_order, is_active, created_at
            FROM hero_slides
            WHERE is_active = TRUE
            ORDER BY sort_order ASC
            LIMIT $1
            "#,
        )
        .bind(LIST_CAP)
        .fetch_all(&self.pool)
        .await?;
        Ok(slides)
    }

    pub async fn create_hero_slide(&self, slide: &SlideContent) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO hero_slides
                (title, subtitle, description, badge, image_url, cta_text, cta_link,
                 sort_order, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW())
            RETURNING id
            "#,
        )
        .bind(&slide.title)
        .bind(&slide.subtitle)
        .bind(&slide.description)
        .bind(&slide.badge)
        .bind(&slide.image_url)
        .bind(&slide.cta_text)
        .bind(&slide.cta_link)
        .bind(slide.sort_order)
        .bind(slide.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Full-record replace; every field is rewritten from the payload.
    pub async fn update_hero_slide(&self, id: Uuid, slide: &SlideContent) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE hero_slides
            SET title = $2, subtitle = $3, description = $4, badge = $5, image_url = $6,
                cta_text = $7, cta_link = $8, sort_order = $9, is_active = $10
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&slide.title)
        .bind(&slide.subtitle)
        .bind(&slide.description)
        .bind(&slide.badge)
        .bind(&slide.image_url)
        .bind(&slide.cta_text)
        .bind(&slide.cta_link)
        .bind(slide.sort_order)
        .bind(slide.is_active)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Slide not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete_hero_slide(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Slide not found".to_string()));
        }
        Ok(())
    }

    // Products

    pub async fn list_products(&self) -> Result<Vec<WebsiteProduct>> {
        let products = sqlx::query_as::<_, WebsiteProduct>(
            r#"
            SELECT id, title, subtitle, image_url, link, badge, sort_order, is_active, created_at
            FROM website_products
            WHERE is_active = TRUE
            ORDER BY sort_order ASC
            LIMIT $1
            "#,
        )
        .bind(LIST_CAP)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    pub async fn create_product(&self, product: &ProductContent) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO website_products
                (title, subtitle, image_url, link, badge, sort_order, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING id
            "#,
        )
        .bind(&product.title)
        .bind(&product.subtitle)
        .bind(&product.image_url)
        .bind(&product.link)
        .bind(&product.badge)
        .bind(product.sort_order)
        .bind(product.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_product(&self, id: Uuid, product: &ProductContent) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE website_products
            SET title = $2, subtitle = $3, image_url = $4, link = $5, badge = $6,
                sort_order = $7, is_active = $8
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&product.title)
        .bind(&product.subtitle)
        .bind(&product.image_url)
        .bind(&product.link)
        .bind(&product.badge)
        .bind(product.sort_order)
        .bind(product.is_active)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Product not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM website_products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Product not found".to_string()));
        }
        Ok(())
    }

    // Testimonials

    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT id, name, organization, role, image_url, text, rating,
                   sort_order, is_active, created_at
            FROM website_testimonials
            WHERE is_active = TRUE
            ORDER BY sort_order ASC
            LIMIT $1
            "#,
        )
        .bind(LIST_CAP)
        .fetch_all(&self.pool)
        .await?;
        Ok(testimonials)
    }

    pub async fn create_testimonial(&self, testimonial: &TestimonialContent) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO website_testimonials
                (name, organization, role, image_url, text, rating, sort_order, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING id
            "#,
        )
        .bind(&testimonial.name)
        .bind(&testimonial.organization)
        .bind(&testimonial.role)
        .bind(&testimonial.image_url)
        .bind(&testimonial.text)
        .bind(testimonial.rating)
        .bind(testimonial.sort_order)
        .bind(testimonial.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_testimonial(&self, id: Uuid, testimonial: &TestimonialContent) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE website_testimonials
            SET name = $2, organization = $3, role = $4, image_url = $5, text = $6,
                rating = $7, sort_order = $8, is_active = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&testimonial.name)
        .bind(&testimonial.organization)
        .bind(&testimonial.role)
        .bind(&testimonial.image_url)
        .bind(&testimonial.text)
        .bind(testimonial.rating)
        .bind(testimonial.sort_order)
        .bind(testimonial.is_active)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Testimonial not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete_testimonial(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM website_testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Testimonial not found".to_string()));
        }
        Ok(())
    }

    // Activities

    pub async fn list_activities(&self) -> Result<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            r#"
            SELECT id, title, image_url, link, sort_order, is_active, created_at
            FROM website_activities
            WHERE is_active = TRUE
            ORDER BY sort_order ASC
            LIMIT $1
            "#,
        )
        .bind(LIST_CAP)
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    pub async fn create_activity(&self, activity: &ActivityContent) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO website_activities
                (title, image_url, link, sort_order, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id
            "#,
        )
        .bind(&activity.title)
        .bind(&activity.image_url)
        .bind(&activity.link)
        .bind(activity.sort_order)
        .bind(activity.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update_activity(&self, id: Uuid, activity: &ActivityContent) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE website_activities
            SET title = $2, image_url = $3, link = $4, sort_order = $5, is_active = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&activity.title)
        .bind(&activity.image_url)
        .bind(&activity.link)
        .bind(activity.sort_order)
        .bind(activity.is_active)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Activity not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete_activity(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM website_activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Activity not found".to_string()));
        }
        Ok(())
    }

    // Section images

    pub async fn list_section_images(&self) -> Result<Vec<SectionImage>> {
        let images = sqlx::query_as::<_, SectionImage>(
            r#"
            SELECT id, section_name, image_url, alt_text, created_at
            FROM section_images
            LIMIT $1
            "#,
        )
        .bind(LIST_CAP)
        .fetch_all(&self.pool)
        .await?;
        Ok(images)
    }

    /// Returns `None` (not an error) when no image is stored for the section.
    pub async fn get_section_image(&self, section_name: &str) -> Result<Option<SectionImage>> {
        let image = sqlx::query_as::<_, SectionImage>(
            r#"
            SELECT id, section_name, image_url, alt_text, created_at
            FROM section_images
            WHERE section_name = $1
            "#,
        )
        .bind(section_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(image)
    }

    /// Upsert keyed by `section_name`: at most one row per section.
    /// `created_at` is written only on first insert.
    pub async fn upsert_section_image(&self, image: &SectionImagePayload) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO section_images (section_name, image_url, alt_text, created_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (section_name)
            DO UPDATE SET image_url = EXCLUDED.image_url, alt_text = EXCLUDED.alt_text
            "#,
        )
        .bind(&image.section_name)
        .bind(&image.image_url)
        .bind(&image.alt_text)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // Seeding

    /// Seeds the default website content once. Guarded by a hero-slide
    /// existence check only; two concurrent calls can both pass the check.
    pub async fn seed_defaults(&self) -> Result<bool> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hero_slides")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(false);
        }

        for slide in seed_data::default_hero_slides() {
            self.create_hero_slide(&slide).await?;
        }
        for product in seed_data::default_products() {
            self.create_product(&product).await?;
        }
        for testimonial in seed_data::default_testimonials() {
            self.create_testimonial(&testimonial).await?;
        }
        for activity in seed_data::default_activities() {
            self.create_activity(&activity).await?;
        }
        for image in seed_data::default_section_images() {
            self.upsert_section_image(&image).await?;
        }

        tracing::info!("default website content seeded");
        Ok(true)
    }
}
