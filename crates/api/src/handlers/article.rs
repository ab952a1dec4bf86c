//! Handlers for the `/articles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::article::{ArticleResponse, CreateArticle, UpdateArticle};
use validator::Validate;

use crate::crud;
use crate::error::{AppResult, ErrorBody};
use crate::mappers::ArticleMapper;
use crate::state::AppState;

/// Tag for grouping article endpoints in the OpenAPI document.
pub static ARTICLE_TAG: &str = "articles";

/// GET /api/v1/articles
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    tag = ARTICLE_TAG,
    responses(
        (status = 200, description = "All articles", body = [ArticleResponse])
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ArticleResponse>>> {
    let articles = crud::list::<ArticleMapper>(&state.pool).await?;
    Ok(Json(articles))
}

/// POST /api/v1/articles
#[utoipa::path(
    post,
    path = "/api/v1/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticle,
    responses(
        (status = 201, description = "Article created", body = ArticleResponse),
        (status = 400, description = "Invalid article data", body = ErrorBody),
        (status = 404, description = "Referenced module not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<(StatusCode, Json<ArticleResponse>)> {
    input.validate()?;
    let article = crud::create::<ArticleMapper, _>(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/v1/articles/{id}
#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = ArticleResponse),
        (status = 404, description = "No article with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArticleResponse>> {
    let article = crud::get::<ArticleMapper>(&state.pool, id).await?;
    Ok(Json(article))
}

/// PUT /api/v1/articles/{id} -- full-replacement update.
#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = String, Path, description = "Article id")),
    request_body = UpdateArticle,
    responses(
        (status = 200, description = "Article updated", body = ArticleResponse),
        (status = 400, description = "Invalid article data", body = ErrorBody),
        (status = 404, description = "Article or referenced module not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<ArticleResponse>> {
    input.validate()?;
    let article = crud::update::<ArticleMapper, _>(&state.pool, id, input).await?;
    Ok(Json(article))
}

/// DELETE /api/v1/articles/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 404, description = "No article with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    crud::delete::<ArticleMapper>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
