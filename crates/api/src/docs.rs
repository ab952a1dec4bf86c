//! OpenAPI document, generated from the DTO schemas and the
//! `#[utoipa::path]` annotations on the handlers. Served interactively
//! at `/docs`.

use utoipa::OpenApi;

use crate::handlers::{article, course, module, photo};

#[derive(OpenApi)]
#[openapi(
    paths(
        course::list,
        course::create,
        course::get_by_id,
        course::update,
        course::delete,
        module::list,
        module::create,
        module::get_by_id,
        module::update,
        module::delete,
        article::list,
        article::create,
        article::get_by_id,
        article::update,
        article::delete,
        photo::list,
        photo::upload,
        photo::get_by_id,
        photo::delete,
    ),
    tags(
        (name = "courses", description = "Courses: the top of the content hierarchy"),
        (name = "modules", description = "Modules: nested course content"),
        (name = "articles", description = "Articles: leaf content inside modules"),
        (name = "photos", description = "Photo uploads and metadata"),
    )
)]
pub struct ApiDoc;
