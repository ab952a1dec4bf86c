//! Handlers for the `/photos` resource.
//!
//! Uploads arrive as multipart form data. Metadata goes through the
//! generic CRUD service like every other resource; the bytes are
//! written to the configured photos directory as `<id>.<ext>`, keyed by
//! the database-assigned id.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::error::CoreError;
use curricula_core::photo;
use curricula_core::types::DbId;
use curricula_db::models::photo::{PhotoResponse, UploadPhoto};
use curricula_db::repositories::{CrudRepository, PhotoRepo};

use crate::crud;
use crate::error::{AppError, AppResult, ErrorBody};
use crate::mappers::PhotoMapper;
use crate::state::AppState;

/// Tag for grouping photo endpoints in the OpenAPI document.
pub static PHOTO_TAG: &str = "photos";

/// GET /api/v1/photos
#[utoipa::path(
    get,
    path = "/api/v1/photos",
    tag = PHOTO_TAG,
    responses(
        (status = 200, description = "All photo metadata", body = [PhotoResponse])
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PhotoResponse>>> {
    let photos = crud::list::<PhotoMapper>(&state.pool).await?;
    Ok(Json(photos))
}

/// GET /api/v1/photos/{id}
#[utoipa::path(
    get,
    path = "/api/v1/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = String, Path, description = "Photo id")),
    responses(
        (status = 200, description = "The photo metadata", body = PhotoResponse),
        (status = 404, description = "No photo with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PhotoResponse>> {
    let photo = crud::get::<PhotoMapper>(&state.pool, id).await?;
    Ok(Json(photo))
}

/// POST /api/v1/photos
///
/// Expects a single multipart `file` field with a png/jpg/jpeg
/// extension. The extension is checked before any side effect; if the
/// disk write fails after the metadata insert, the row is removed again
/// rather than left dangling.
#[utoipa::path(
    post,
    path = "/api/v1/photos",
    tag = PHOTO_TAG,
    request_body(
        content_type = "multipart/form-data",
        description = "A single `file` field holding the photo bytes"
    ),
    responses(
        (status = 201, description = "Photo stored", body = PhotoResponse),
        (status = 400, description = "Missing file part or disallowed extension", body = ErrorBody)
    )
)]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<PhotoResponse>)> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::BadRequest("File part has no file name".to_string()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing multipart field \"file\"".to_string()))?;

    let extension = photo::validate_extension(&file_name).map_err(AppError::BadRequest)?;

    // Metadata first: the stored file is named after the generated id.
    let created = crud::create::<PhotoMapper, _>(&state.pool, UploadPhoto { file_name }).await?;

    let path = state
        .config
        .photos_dir
        .join(photo::stored_file_name(created.id, &extension));

    if let Err(err) = tokio::fs::write(&path, &data).await {
        if let Err(cleanup_err) = PhotoRepo::delete(&state.pool, created.id).await {
            tracing::error!(error = %cleanup_err, photo_id = %created.id,
                "Failed to remove photo row after a failed file write");
        }
        return Err(AppError::InternalError(format!(
            "Failed to store photo file: {err}"
        )));
    }

    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/v1/photos/{id}
///
/// Removes the metadata row, then best-effort removes the stored file.
#[utoipa::path(
    delete,
    path = "/api/v1/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = String, Path, description = "Photo id")),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 404, description = "No photo with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let photo = PhotoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Photo", id))?;

    crud::delete::<PhotoMapper>(&state.pool, id).await?;

    if let Some(extension) = photo::file_extension(&photo.file_name) {
        let path = state
            .config
            .photos_dir
            .join(photo::stored_file_name(id, &extension.to_ascii_lowercase()));
        if let Err(err) = tokio::fs::remove_file(&path).await {
            tracing::warn!(error = %err, photo_id = %id, "Stored photo file could not be removed");
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
