//! Photo metadata mapping. The upload request references nothing; the
//! file itself is handled by the upload handler.

use async_trait::async_trait;
use curricula_db::models::photo::{Photo, PhotoDraft, PhotoResponse, UploadPhoto};
use curricula_db::repositories::PhotoRepo;
use sqlx::PgPool;

use crate::crud::{IntoDraft, ResourceMapper};
use crate::error::AppResult;

pub struct PhotoMapper;

impl ResourceMapper for PhotoMapper {
    type Repo = PhotoRepo;
    type Response = PhotoResponse;

    const LABEL: &'static str = "Photo";

    fn to_response(entity: Photo) -> PhotoResponse {
        entity.into()
    }
}

#[async_trait]
impl IntoDraft for UploadPhoto {
    type Repo = PhotoRepo;

    async fn into_draft(self, _pool: &PgPool) -> AppResult<PhotoDraft> {
        Ok(PhotoDraft {
            file_name: self.file_name,
        })
    }
}
