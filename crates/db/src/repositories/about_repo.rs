//! Repository for the singleton `about_section` row.

use sqlx::PgPool;

use crate::models::about::{AboutSection, UpdateAbout};

/// Column list for `about_section` queries.
const COLUMNS: &str = "id, full_name_en, full_name_ar, title_en, title_ar, bio_en, bio_ar, \
    avatar_path, cv_path, years_experience, projects_count, show_skills, show_projects, \
    show_services, show_certifications, show_blog, created_at, updated_at";

/// Provides read/update access to the about section (always row id = 1).
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the singleton row. The row is seeded by migration, so this
    /// never legitimately returns zero rows.
    pub async fn get(pool: &PgPool) -> Result<AboutSection, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_section WHERE id = 1");
        sqlx::query_as::<_, AboutSection>(&query)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update to the singleton row.
    ///
    /// Text fields use `NULLIF($n, '')` so that both absent fields and
    /// empty strings leave the stored value untouched (the original
    /// "only overwrite if non-empty" rule). Numbers and toggles apply
    /// whenever present.
    pub async fn update(pool: &PgPool, input: &UpdateAbout) -> Result<AboutSection, sqlx::Error> {
        let query = format!(
            "UPDATE about_section SET
                full_name_en = COALESCE(NULLIF($1, ''), full_name_en),
                full_name_ar = COALESCE(NULLIF($2, ''), full_name_ar),
                title_en = COALESCE(NULLIF($3, ''), title_en),
                title_ar = COALESCE(NULLIF($4, ''), title_ar),
                bio_en = COALESCE(NULLIF($5, ''), bio_en),
                bio_ar = COALESCE(NULLIF($6, ''), bio_ar),
                avatar_path = COALESCE(NULLIF($7, ''), avatar_path),
                cv_path = COALESCE(NULLIF($8, ''), cv_path),
                years_experience = COALESCE($9, years_experience),
                projects_count = COALESCE($10, projects_count),
                show_skills = COALESCE($11, show_skills),
                show_projects = COALESCE($12, show_projects),
                show_services = COALESCE($13, show_services),
                show_certifications = COALESCE($14, show_certifications),
                show_blog = COALESCE($15, show_blog)
             WHERE id = 1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(&input.full_name_en)
            .bind(&input.full_name_ar)
            .bind(&input.title_en)
            .bind(&input.title_ar)
            .bind(&input.bio_en)
            .bind(&input.bio_ar)
            .bind(&input.avatar_path)
            .bind(&input.cv_path)
            .bind(input.years_experience)
            .bind(input.projects_count)
            .bind(input.show_skills)
            .bind(input.show_projects)
            .bind(input.show_services)
            .bind(input.show_certifications)
            .bind(input.show_blog)
            .fetch_one(pool)
            .await
    }
}
