//! Route tree.

pub mod article;
pub mod course;
pub mod health;
pub mod module;
pub mod photo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /courses            GET (filtered/paginated list), POST
/// /courses/{id}       GET, PUT, DELETE
/// /modules            GET, POST
/// /modules/{id}       GET, PUT, DELETE
/// /articles           GET, POST
/// /articles/{id}      GET, PUT, DELETE
/// /photos             GET, POST (multipart upload)
/// /photos/{id}        GET, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/courses", course::router())
        .nest("/modules", module::router())
        .nest("/articles", article::router())
        .nest("/photos", photo::router())
}
