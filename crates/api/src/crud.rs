//! Generic CRUD service.
//!
//! The create / list / get / update / delete algorithm is written once
//! here, parameterized over a [`ResourceMapper`], so each resource only
//! supplies entity-specific mapping: how a request becomes a persistable
//! draft ([`IntoDraft`]) and how an entity becomes a response shape.
//! Existence-check-then-act logic and not-found messages are therefore
//! uniform across every resource.

use async_trait::async_trait;
use curricula_core::error::CoreError;
use curricula_core::types::DbId;
use curricula_db::repositories::CrudRepository;
use sqlx::PgPool;

use crate::error::AppResult;

/// Per-resource mapping capability the generic service is built against.
pub trait ResourceMapper {
    /// Repository the resource persists through.
    type Repo: CrudRepository;
    /// Shape returned to clients.
    type Response;

    /// Resource-kind label used in not-found messages.
    const LABEL: &'static str = "Record";

    /// Convert a fetched entity into the response shape.
    fn to_response(entity: <Self::Repo as CrudRepository>::Entity) -> Self::Response;
}

/// A request shape convertible into a persistable draft.
///
/// Conversion resolves any referenced ids against their owning stores;
/// a dangling reference fails with NotFound rather than producing a
/// null reference. Create and update requests of a resource both
/// implement this against the same repository.
#[async_trait]
pub trait IntoDraft: Send + Sized {
    type Repo: CrudRepository;

    async fn into_draft(
        self,
        pool: &PgPool,
    ) -> AppResult<<Self::Repo as CrudRepository>::Draft>;
}

/// Fetch every record and map each to its response shape, in datastore
/// iteration order.
pub async fn list<M: ResourceMapper>(pool: &PgPool) -> AppResult<Vec<M::Response>> {
    let entities = <M::Repo as CrudRepository>::find_all(pool).await?;
    Ok(entities.into_iter().map(M::to_response).collect())
}

/// Fetch one record by id; NotFound if absent.
pub async fn get<M: ResourceMapper>(pool: &PgPool, id: DbId) -> AppResult<M::Response> {
    let entity = <M::Repo as CrudRepository>::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found(M::LABEL, id))?;
    Ok(M::to_response(entity))
}

/// Convert the request to a draft, persist it, and return the mapped
/// response. The database assigns the fresh id; exactly one row is
/// inserted.
pub async fn create<M, R>(pool: &PgPool, request: R) -> AppResult<M::Response>
where
    M: ResourceMapper,
    R: IntoDraft<Repo = M::Repo>,
{
    let draft = request.into_draft(pool).await?;
    let entity = <M::Repo as CrudRepository>::insert(pool, &draft).await?;
    Ok(M::to_response(entity))
}

/// Full-replacement update.
///
/// The record's existence is verified before the request is resolved,
/// so updating a missing id reports this resource's not-found message
/// even when the request also carries dangling references.
pub async fn update<M, R>(pool: &PgPool, id: DbId, request: R) -> AppResult<M::Response>
where
    M: ResourceMapper,
    R: IntoDraft<Repo = M::Repo>,
{
    <M::Repo as CrudRepository>::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::not_found(M::LABEL, id))?;

    let draft = request.into_draft(pool).await?;
    let entity = <M::Repo as CrudRepository>::replace(pool, id, &draft)
        .await?
        .ok_or(CoreError::not_found(M::LABEL, id))?;
    Ok(M::to_response(entity))
}

/// Delete by id. Deleting a nonexistent id is NotFound, never a silent
/// no-op.
pub async fn delete<M: ResourceMapper>(pool: &PgPool, id: DbId) -> AppResult<()> {
    if <M::Repo as CrudRepository>::delete(pool, id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found(M::LABEL, id).into())
    }
}
