//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::course::{
    CourseFilter, CoursePage, CourseResponse, CreateCourse, UpdateCourse,
};
use curricula_db::repositories::CourseRepo;
use validator::Validate;

use crate::crud;
use crate::error::{AppResult, ErrorBody};
use crate::mappers::CourseMapper;
use crate::state::AppState;

/// Tag for grouping course endpoints in the OpenAPI document.
pub static COURSE_TAG: &str = "courses";

/// GET /api/v1/courses
///
/// The one specialized listing: optional title/description/id filters
/// with offset/limit pagination delegated to the database.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = COURSE_TAG,
    params(CourseFilter),
    responses(
        (status = 200, description = "One page of matching courses", body = CoursePage),
        (status = 400, description = "Invalid filter parameters", body = ErrorBody)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> AppResult<Json<CoursePage>> {
    filter.validate()?;
    let (courses, total) = CourseRepo::find_all_by_filter(&state.pool, &filter).await?;
    Ok(Json(CoursePage {
        page: filter.page,
        page_size: filter.page_size,
        total,
        content: courses.into_iter().map(CourseResponse::from).collect(),
    }))
}

/// POST /api/v1/courses
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    tag = COURSE_TAG,
    request_body = CreateCourse,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid course data", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    input.validate()?;
    let course = crud::create::<CourseMapper, _>(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses/{id}
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "No course with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CourseResponse>> {
    let course = crud::get::<CourseMapper>(&state.pool, id).await?;
    Ok(Json(course))
}

/// PUT /api/v1/courses/{id} -- full-replacement update.
#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = String, Path, description = "Course id")),
    request_body = UpdateCourse,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Invalid course data", body = ErrorBody),
        (status = 404, description = "No course with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<CourseResponse>> {
    input.validate()?;
    let course = crud::update::<CourseMapper, _>(&state.pool, id, input).await?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "No course with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    crud::delete::<CourseMapper>(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
