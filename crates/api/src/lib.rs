//! HTTP layer: route tree, handlers, the generic CRUD service and the
//! mapper layer that feeds it, plus error translation to the uniform
//! JSON error payload.

pub mod config;
pub mod crud;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod mappers;
pub mod router;
pub mod routes;
pub mod state;
