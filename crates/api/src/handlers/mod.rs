//! HTTP handlers, one module per resource.
//!
//! Handlers validate the request at the boundary, then delegate to the
//! generic CRUD service; everything below them reports failures through
//! [`AppError`](crate::error::AppError).

pub mod article;
pub mod course;
pub mod module;
pub mod photo;
