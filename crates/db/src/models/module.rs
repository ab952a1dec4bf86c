//! Module entity model and DTOs.
//!
//! Modules belong to a course and optionally nest under a parent module,
//! forming a tree rooted at modules with a null parent. The parent is
//! stored as an id reference, never a live object, so serialization and
//! traversal stay cycle-free.

use curricula_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Sibling ordering hint; not enforced unique.
    pub position: i32,
    pub course_id: DbId,
    pub parent_module_id: Option<DbId>,
}

/// Fully-resolved module fields, ready to persist.
///
/// Both referenced ids have already been checked against their owning
/// tables by the mapper layer.
#[derive(Debug, Clone)]
pub struct ModuleDraft {
    pub title: String,
    pub description: String,
    pub position: i32,
    pub course_id: DbId,
    pub parent_module_id: Option<DbId>,
}

/// DTO for creating a new module.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateModule {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    /// Defaults to 0 if omitted.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub position: i32,
    #[schema(value_type = String, format = "uuid")]
    pub course_id: DbId,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub parent_module_id: Option<DbId>,
}

/// DTO for replacing an existing module. Full replacement: the complete
/// field set is required on every update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateModule {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub position: i32,
    #[schema(value_type = String, format = "uuid")]
    pub course_id: DbId,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub parent_module_id: Option<DbId>,
}

/// Module shape returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModuleResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub position: i32,
    #[schema(value_type = String, format = "uuid")]
    pub course_id: DbId,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub parent_module_id: Option<DbId>,
}

impl From<Module> for ModuleResponse {
    fn from(entity: Module) -> Self {
        ModuleResponse {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            position: entity.position,
            course_id: entity.course_id,
            parent_module_id: entity.parent_module_id,
        }
    }
}
