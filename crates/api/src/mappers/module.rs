//! Module request/response mapping.
//!
//! A module carries two references: its course (required) and an
//! optional parent module. Both must resolve to live rows before the
//! module is persisted.

use async_trait::async_trait;
use curricula_core::error::CoreError;
use curricula_db::models::module::{CreateModule, Module, ModuleDraft, ModuleResponse, UpdateModule};
use curricula_db::repositories::{CourseRepo, CrudRepository, ModuleRepo};
use sqlx::PgPool;

use crate::crud::{IntoDraft, ResourceMapper};
use crate::error::AppResult;

pub struct ModuleMapper;

impl ResourceMapper for ModuleMapper {
    type Repo = ModuleRepo;
    type Response = ModuleResponse;

    const LABEL: &'static str = "Module";

    fn to_response(entity: Module) -> ModuleResponse {
        entity.into()
    }
}

#[async_trait]
impl IntoDraft for CreateModule {
    type Repo = ModuleRepo;

    async fn into_draft(self, pool: &PgPool) -> AppResult<ModuleDraft> {
        resolve_references(
            pool,
            ModuleDraft {
                title: self.title,
                description: self.description,
                position: self.position,
                course_id: self.course_id,
                parent_module_id: self.parent_module_id,
            },
        )
        .await
    }
}

#[async_trait]
impl IntoDraft for UpdateModule {
    type Repo = ModuleRepo;

    async fn into_draft(self, pool: &PgPool) -> AppResult<ModuleDraft> {
        resolve_references(
            pool,
            ModuleDraft {
                title: self.title,
                description: self.description,
                position: self.position,
                course_id: self.course_id,
                parent_module_id: self.parent_module_id,
            },
        )
        .await
    }
}

/// Check both referenced ids against their owning tables.
///
/// The course is resolved first: when both references dangle, the
/// course error is the one reported. A null parent skips the parent
/// lookup entirely.
async fn resolve_references(pool: &PgPool, draft: ModuleDraft) -> AppResult<ModuleDraft> {
    CourseRepo::find_by_id(pool, draft.course_id)
        .await?
        .ok_or(CoreError::not_found("Course", draft.course_id))?;

    if let Some(parent_id) = draft.parent_module_id {
        ModuleRepo::find_by_id(pool, parent_id)
            .await?
            .ok_or(CoreError::not_found("Module", parent_id))?;
    }

    Ok(draft)
}
