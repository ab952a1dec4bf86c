//! Domain layer shared by the database and API crates.
//!
//! Contains the error taxonomy, common id types, and the photo
//! file-naming rules. Deliberately free of any sqlx or axum dependency.

pub mod error;
pub mod photo;
pub mod types;
