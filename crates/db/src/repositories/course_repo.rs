//! Repository for the `courses` table.

use async_trait::async_trait;
use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CourseDraft, CourseFilter};
use crate::repositories::CrudRepository;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description";

/// Provides CRUD operations for courses, plus the filtered,
/// paginated listing.
pub struct CourseRepo;

#[async_trait]
impl CrudRepository for CourseRepo {
    type Entity = Course;
    type Draft = CourseDraft;

    async fn insert(pool: &PgPool, draft: &CourseDraft) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&draft.title)
            .bind(&draft.description)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        draft: &CourseDraft,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET title = $2, description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .fetch_optional(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl CourseRepo {
    /// Filtered, paginated listing.
    ///
    /// Text filters are case-insensitive substring matches, the id
    /// filter is exact; all are optional and combined with AND.
    /// Offset/limit is delegated to the database. Returns the page of
    /// rows plus the total match count across all pages.
    pub async fn find_all_by_filter(
        pool: &PgPool,
        filter: &CourseFilter,
    ) -> Result<(Vec<Course>, i64), sqlx::Error> {
        const MATCH: &str = "($1::text IS NULL OR title ILIKE '%' || $1 || '%')
             AND ($2::text IS NULL OR description ILIKE '%' || $2 || '%')
             AND ($3::uuid IS NULL OR id = $3)";

        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE {MATCH}
             ORDER BY title ASC, id ASC
             LIMIT $4 OFFSET $5"
        );
        let rows = sqlx::query_as::<_, Course>(&query)
            .bind(&filter.title)
            .bind(&filter.description)
            .bind(filter.id)
            .bind(filter.page_size)
            .bind(filter.page * filter.page_size)
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM courses WHERE {MATCH}");
        let (total,): (i64,) = sqlx::query_as(&count_query)
            .bind(&filter.title)
            .bind(&filter.description)
            .bind(filter.id)
            .fetch_one(pool)
            .await?;

        Ok((rows, total))
    }
}
