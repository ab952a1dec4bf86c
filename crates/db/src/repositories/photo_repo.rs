//! Repository for the `photos` table.

use async_trait::async_trait;
use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::{Photo, PhotoDraft};
use crate::repositories::CrudRepository;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, file_name";

/// Provides CRUD operations for photo metadata.
pub struct PhotoRepo;

#[async_trait]
impl CrudRepository for PhotoRepo {
    type Entity = Photo;
    type Draft = PhotoDraft;

    async fn insert(pool: &PgPool, draft: &PhotoDraft) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (file_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(&draft.file_name)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        draft: &PhotoDraft,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "UPDATE photos SET file_name = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(&draft.file_name)
            .fetch_optional(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos");
        sqlx::query_as::<_, Photo>(&query).fetch_all(pool).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
