//! Repository for the `modules` table.

use async_trait::async_trait;
use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::module::{Module, ModuleDraft};
use crate::repositories::CrudRepository;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, position, course_id, parent_module_id";

/// Provides CRUD operations for modules.
pub struct ModuleRepo;

#[async_trait]
impl CrudRepository for ModuleRepo {
    type Entity = Module;
    type Draft = ModuleDraft;

    async fn insert(pool: &PgPool, draft: &ModuleDraft) -> Result<Module, sqlx::Error> {
        let query = format!(
            "INSERT INTO modules (title, description, position, course_id, parent_module_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.position)
            .bind(draft.course_id)
            .bind(draft.parent_module_id)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        draft: &ModuleDraft,
    ) -> Result<Option<Module>, sqlx::Error> {
        let query = format!(
            "UPDATE modules SET
                title = $2,
                description = $3,
                position = $4,
                course_id = $5,
                parent_module_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.position)
            .bind(draft.course_id)
            .bind(draft.parent_module_id)
            .fetch_optional(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modules WHERE id = $1");
        sqlx::query_as::<_, Module>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modules");
        sqlx::query_as::<_, Module>(&query).fetch_all(pool).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM modules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
