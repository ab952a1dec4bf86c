//! Mapper layer: request-to-draft and entity-to-response conversion
//! per resource.
//!
//! Each resource gets a zero-sized mapper implementing
//! [`ResourceMapper`](crate::crud::ResourceMapper), and its request DTOs
//! implement [`IntoDraft`](crate::crud::IntoDraft). Foreign-key ids are
//! resolved here, against their owning stores, before anything is
//! persisted; a dangling reference fails with NotFound.

pub mod article;
pub mod course;
pub mod module;
pub mod photo;

pub use article::ArticleMapper;
pub use course::CourseMapper;
pub use module::ModuleMapper;
pub use photo::PhotoMapper;
