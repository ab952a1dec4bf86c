//! Course entity model and DTOs.

use curricula_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: String,
}

/// Fully-resolved course fields, ready to persist.
#[derive(Debug, Clone)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourse {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

/// DTO for replacing an existing course. Updates are full replacement,
/// so the field set matches [`CreateCourse`] exactly.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

/// Course shape returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: DbId,
    pub title: String,
    pub description: String,
}

impl From<Course> for CourseResponse {
    fn from(entity: Course) -> Self {
        CourseResponse {
            id: entity.id,
            title: entity.title,
            description: entity.description,
        }
    }
}

fn default_page_size() -> i64 {
    10
}

/// Query parameters for the filtered, paginated course listing.
///
/// All filters are optional and combined with AND; text filters are
/// case-insensitive substring matches. Offset/limit is delegated to the
/// database.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct CourseFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Case-insensitive substring match on the description.
    pub description: Option<String>,
    /// Exact id match.
    #[param(value_type = Option<String>, format = "uuid")]
    pub id: Option<DbId>,
    /// Zero-based page number.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub page: i64,
    /// Records per page.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: i64,
}

/// One page of the course listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CoursePage {
    pub page: i64,
    pub page_size: i64,
    /// Total records matching the filter, across all pages.
    pub total: i64,
    pub content: Vec<CourseResponse>,
}
