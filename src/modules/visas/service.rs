use sqlx::PgPool;
use sqlx::types::Json;

use crate::modules::visas::model::{CreateVisaDto, UpdateVisaDto, Visa};
use crate::utils::errors::AppError;

const VISA_COLUMNS: &str = "id, name, slug, description, featured_image, quick_facts, \
                            testimonials, faqs, packages, created_at, updated_at";

pub struct VisaService;

impl VisaService {
    pub async fn get_all(db: &PgPool) -> Result<Vec<Visa>, AppError> {
        let visas = sqlx::query_as::<_, Visa>(&format!(
            "SELECT {VISA_COLUMNS} FROM visas ORDER BY created_at"
        ))
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(visas)
    }

    pub async fn find_by_slug(db: &PgPool, slug: &str) -> Result<Option<Visa>, AppError> {
        let visa = sqlx::query_as::<_, Visa>(&format!(
            "SELECT {VISA_COLUMNS} FROM visas WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(visa)
    }

    pub async fn create(db: &PgPool, dto: CreateVisaDto) -> Result<Visa, AppError> {
        let visa = sqlx::query_as::<_, Visa>(&format!(
            "INSERT INTO visas
                 (name, slug, description, featured_image, quick_facts,
                  testimonials, faqs, packages)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {VISA_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.slug)
        .bind(&dto.description)
        .bind(&dto.featured_image)
        .bind(dto.quick_facts.map(Json))
        .bind(Json(dto.testimonials))
        .bind(Json(dto.faqs))
        .bind(Json(dto.packages))
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(visa)
    }

    pub async fn update_by_slug(
        db: &PgPool,
        slug: &str,
        dto: UpdateVisaDto,
    ) -> Result<Option<Visa>, AppError> {
        let visa = sqlx::query_as::<_, Visa>(&format!(
            "UPDATE visas
             SET name = COALESCE($2, name),
                 slug = COALESCE($3, slug),
                 description = COALESCE($4, description),
                 featured_image = COALESCE($5, featured_image),
                 quick_facts = COALESCE($6, quick_facts),
                 testimonials = COALESCE($7, testimonials),
                 faqs = COALESCE($8, faqs),
                 packages = COALESCE($9, packages),
                 updated_at = now()
             WHERE slug = $1
             RETURNING {VISA_COLUMNS}"
        ))
        .bind(slug)
        .bind(dto.name)
        .bind(dto.slug)
        .bind(dto.description)
        .bind(dto.featured_image)
        .bind(dto.quick_facts.map(Json))
        .bind(dto.testimonials.map(Json))
        .bind(dto.faqs.map(Json))
        .bind(dto.packages.map(Json))
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

        Ok(visa)
    }

    pub async fn delete_by_slug(db: &PgPool, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM visas WHERE slug = $1")
            .bind(slug)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}
