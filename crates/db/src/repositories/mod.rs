//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The shared contract is
//! [`CrudRepository`], which the generic CRUD service in the API crate
//! is parameterized over; `CourseRepo` adds the one specialized
//! filtered/paginated query on top.

use async_trait::async_trait;
use curricula_core::types::DbId;
use sqlx::PgPool;

pub mod article_repo;
pub mod course_repo;
pub mod module_repo;
pub mod photo_repo;

pub use article_repo::ArticleRepo;
pub use course_repo::CourseRepo;
pub use module_repo::ModuleRepo;
pub use photo_repo::PhotoRepo;

/// Uniform persistence contract: find-by-id / find-all / insert /
/// replace / delete per entity.
///
/// `Draft` is the fully-resolved field set without an id. The database
/// assigns a fresh id on [`insert`](CrudRepository::insert);
/// [`replace`](CrudRepository::replace) overwrites every mutable column
/// (full-replacement update) and returns `None` when the id is unknown.
#[async_trait]
pub trait CrudRepository {
    type Entity: Send + Unpin;
    type Draft: Send + Sync;

    /// Insert a new row, returning the created entity with its
    /// database-assigned id.
    async fn insert(pool: &PgPool, draft: &Self::Draft) -> Result<Self::Entity, sqlx::Error>;

    /// Overwrite every mutable column of the row with the given id.
    /// Returns `None` if no such row exists.
    async fn replace(
        pool: &PgPool,
        id: DbId,
        draft: &Self::Draft,
    ) -> Result<Option<Self::Entity>, sqlx::Error>;

    /// Find a row by its id.
    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Self::Entity>, sqlx::Error>;

    /// Fetch every row, in datastore iteration order.
    async fn find_all(pool: &PgPool) -> Result<Vec<Self::Entity>, sqlx::Error>;

    /// Delete a row by id. Returns `true` if a row was removed.
    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error>;
}
