//! Handlers for the `/modules` resource.
//!
//! Modules reference their course and, optionally, a parent module;
//! both ids are resolved by the mapper layer before anything is
//! persisted, the course first.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::module::{CreateModule, ModuleResponse, UpdateModule};
use validator::Validate;

use crate::crud;
use crate::error::{AppResult, ErrorBody};
use crate::mappers::ModuleMapper;
use crate::state::AppState;

/// Tag for grouping module endpoints in the OpenAPI document.
pub static MODULE_TAG: &str = "modules";

/// GET /api/v1/modules
#[utoipa::path(
    get,
    path = "/api/v1/modules",
    tag = MODULE_TAG,
    responses(
        (status = 200, description = "All modules", body = [ModuleResponse])
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ModuleResponse>>> {
    let modules = crud::list::<ModuleMapper>(&state.pool).await?;
    Ok(Json(modules))
}

/// POST /api/v1/modules
#[utoipa::path(
    post,
    path = "/api/v1/modules",
    tag = MODULE_TAG,
    request_body = CreateModule,
    responses(
        (status = 201, description = "Module created", body = ModuleResponse),
        (status = 400, description = "Invalid module data", body = ErrorBody),
        (status = 404, description = "Referenced course or parent module not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateModule>,
) -> AppResult<(StatusCode, Json<ModuleResponse>)> {
    input.validate()?;
    let module = crud::create::<ModuleMapper, _>(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(module)))
}

/// GET /api/v1/modules/{id}
#[utoipa::path(
    get,
    path = "/api/v1/modules/{id}",
    tag = MODULE_TAG,
    params(("id" = String, Path, description = "Module id")),
    responses(
        (status = 200, description = "The module", body = ModuleResponse),
        (status = 404, description = "No module with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ModuleResponse>> {
    let module = crud::get::<ModuleMapper>(&state.pool, id).await?;
    Ok(Json(module))
}

/// PUT /api/v1/modules/{id} -- full-replacement update.
#[utoipa::path(
    put,
    path = "/api/v1/modules/{id}",
    tag = MODULE_TAG,
    params(("id" = String, Path, description = "Module id")),
    request_body = UpdateModule,
    responses(
        (status = 200, description = "Module updated", body = ModuleResponse),
        (status = 400, description = "Invalid module data", body = ErrorBody),
        (status = 404, description = "Module, referenced course or parent not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateModule>,
) -> AppResult<Json<ModuleResponse>> {
    input.validate()?;
    let module = crud::update::<ModuleMapper, _>(&state.pool, id, input).await?;
    Ok(Json(module))
}

/// DELETE /api/v1/modules/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/modules/{id}",
    tag = MODULE_TAG,
    params(("id" = String, Path, description = "Module id")),
    responses(
        (status = 204, description = "Module deleted"),
        (status = 404, description = "No module with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    crud::delete::<ModuleMapper>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
