//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A plain draft struct: the fully-resolved field set persisted on
//!   insert/replace (no id; the database assigns one)
//! - `Deserialize` + `Validate` request DTOs checked at the boundary
//! - A `Serialize` response DTO built from the entity

pub mod article;
pub mod course;
pub mod module;
pub mod photo;
