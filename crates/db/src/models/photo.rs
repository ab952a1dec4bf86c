//! Photo metadata model and DTOs.
//!
//! Only the metadata lives in the database. The uploaded bytes are
//! written to disk by the API layer under `<id>.<ext>`; `file_name`
//! records the name the client uploaded.

use curricula_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub file_name: String,
}

/// Fully-resolved photo metadata, ready to persist.
#[derive(Debug, Clone)]
pub struct PhotoDraft {
    pub file_name: String,
}

/// Upload request as seen by the service layer, built by the handler
/// from the multipart `file` field (extension already validated).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadPhoto {
    pub file_name: String,
}

/// Photo shape returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhotoResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: DbId,
    pub file_name: String,
}

impl From<Photo> for PhotoResponse {
    fn from(entity: Photo) -> Self {
        PhotoResponse {
            id: entity.id,
            file_name: entity.file_name,
        }
    }
}
