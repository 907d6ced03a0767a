use uuid::Uuid;

use hawktrivia_domain::pagination::PageRequest;

use crate::domain::repository::PhotoRepository;
use crate::domain::types::Photo;
use crate::error::PartyServiceError;

// ── ListPhotos ───────────────────────────────────────────────────────────────

pub struct ListPhotosUseCase<P: PhotoRepository> {
    pub photos: P,
}

impl<P: PhotoRepository> ListPhotosUseCase<P> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Photo>, PartyServiceError> {
        self.photos.list(page).await
    }
}

// ── ToggleLike ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ToggleLikeOutput {
    pub liked: bool,
    pub like_count: u64,
}

pub struct ToggleLikeUseCase<P: PhotoRepository> {
    pub photos: P,
}

impl<P: PhotoRepository> ToggleLikeUseCase<P> {
    pub async fn execute(
        &self,
        photo_id: Uuid,
        user_name: &str,
    ) -> Result<ToggleLikeOutput, PartyServiceError> {
        if self.photos.find_by_id(photo_id).await?.is_none() {
            return Err(PartyServiceError::PhotoNotFound);
        }
        let (liked, like_count) = self.photos.toggle_like(photo_id, user_name).await?;
        Ok(ToggleLikeOutput { liked, like_count })
    }
}
