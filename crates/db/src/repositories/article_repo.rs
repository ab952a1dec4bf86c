//! Repository for the `articles` table.

use async_trait::async_trait;
use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, ArticleDraft};
use crate::repositories::CrudRepository;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, content, module_id";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

#[async_trait]
impl CrudRepository for ArticleRepo {
    type Entity = Article;
    type Draft = ArticleDraft;

    async fn insert(pool: &PgPool, draft: &ArticleDraft) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, description, content, module_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(&draft.content)
            .bind(draft.module_id)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &PgPool,
        id: DbId,
        draft: &ArticleDraft,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = $2,
                description = $3,
                content = $4,
                module_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(&draft.content)
            .bind(draft.module_id)
            .fetch_optional(pool)
            .await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn find_all(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
