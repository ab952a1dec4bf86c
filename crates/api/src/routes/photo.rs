//! Route definitions for the `/photos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::photo;
use crate::state::AppState;

/// Routes mounted at `/photos`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> upload (multipart)
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(photo::list).post(photo::upload))
        .route("/{id}", get(photo::get_by_id).delete(photo::delete))
}
