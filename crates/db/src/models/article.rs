//! Article entity model and DTOs.

use curricula_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub module_id: DbId,
}

/// Fully-resolved article fields, ready to persist.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub content: String,
    pub module_id: DbId,
}

/// DTO for creating a new article.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateArticle {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[validate(length(max = 300000))]
    pub content: String,
    #[schema(value_type = String, format = "uuid")]
    pub module_id: DbId,
}

/// DTO for replacing an existing article. Full replacement semantics.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateArticle {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[validate(length(max = 300000))]
    pub content: String,
    #[schema(value_type = String, format = "uuid")]
    pub module_id: DbId,
}

/// Article shape returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub content: String,
    #[schema(value_type = String, format = "uuid")]
    pub module_id: DbId,
}

impl From<Article> for ArticleResponse {
    fn from(entity: Article) -> Self {
        ArticleResponse {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            content: entity.content,
            module_id: entity.module_id,
        }
    }
}
