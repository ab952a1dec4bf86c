//! Course request/response mapping. Courses reference nothing, so
//! conversion is a field copy.

use async_trait::async_trait;
use curricula_db::models::course::{Course, CourseDraft, CourseResponse, CreateCourse, UpdateCourse};
use curricula_db::repositories::CourseRepo;
use sqlx::PgPool;

use crate::crud::{IntoDraft, ResourceMapper};
use crate::error::AppResult;

pub struct CourseMapper;

impl ResourceMapper for CourseMapper {
    type Repo = CourseRepo;
    type Response = CourseResponse;

    const LABEL: &'static str = "Course";

    fn to_response(entity: Course) -> CourseResponse {
        entity.into()
    }
}

#[async_trait]
impl IntoDraft for CreateCourse {
    type Repo = CourseRepo;

    async fn into_draft(self, _pool: &PgPool) -> AppResult<CourseDraft> {
        Ok(CourseDraft {
            title: self.title,
            description: self.description,
        })
    }
}

#[async_trait]
impl IntoDraft for UpdateCourse {
    type Repo = CourseRepo;

    async fn into_draft(self, _pool: &PgPool) -> AppResult<CourseDraft> {
        Ok(CourseDraft {
            title: self.title,
            description: self.description,
        })
    }
}
