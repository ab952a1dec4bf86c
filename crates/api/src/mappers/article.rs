//! Article request/response mapping. Articles carry one reference, the
//! module they belong to.

use async_trait::async_trait;
use curricula_core::error::CoreError;
use curricula_db::models::article::{
    Article, ArticleDraft, ArticleResponse, CreateArticle, UpdateArticle,
};
use curricula_db::repositories::{ArticleRepo, CrudRepository, ModuleRepo};
use sqlx::PgPool;

use crate::crud::{IntoDraft, ResourceMapper};
use crate::error::AppResult;

pub struct ArticleMapper;

impl ResourceMapper for ArticleMapper {
    type Repo = ArticleRepo;
    type Response = ArticleResponse;

    const LABEL: &'static str = "Article";

    fn to_response(entity: Article) -> ArticleResponse {
        entity.into()
    }
}

#[async_trait]
impl IntoDraft for CreateArticle {
    type Repo = ArticleRepo;

    async fn into_draft(self, pool: &PgPool) -> AppResult<ArticleDraft> {
        resolve_module(
            pool,
            ArticleDraft {
                title: self.title,
                description: self.description,
                content: self.content,
                module_id: self.module_id,
            },
        )
        .await
    }
}

#[async_trait]
impl IntoDraft for UpdateArticle {
    type Repo = ArticleRepo;

    async fn into_draft(self, pool: &PgPool) -> AppResult<ArticleDraft> {
        resolve_module(
            pool,
            ArticleDraft {
                title: self.title,
                description: self.description,
                content: self.content,
                module_id: self.module_id,
            },
        )
        .await
    }
}

/// Check the referenced module is a live row.
async fn resolve_module(pool: &PgPool, draft: ArticleDraft) -> AppResult<ArticleDraft> {
    ModuleRepo::find_by_id(pool, draft.module_id)
        .await?
        .ok_or(CoreError::not_found("Module", draft.module_id))?;

    Ok(draft)
}
