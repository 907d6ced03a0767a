use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use uuid::Uuid;

use hawktrivia_auth_types::identity::PlayerIdentity;
use hawktrivia_domain::pagination::PageRequest;

use crate::domain::types::Photo;
use crate::error::PartyServiceError;
use crate::state::AppState;
use crate::usecase::photo::{ListPhotosUseCase, ToggleLikeUseCase};

#[derive(Serialize)]
pub struct PhotoResponse {
    pub id: String,
    pub uploader: String,
    pub caption: Option<String>,
    pub url: String,
    pub like_count: u64,
    #[serde(serialize_with = "hawktrivia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id.to_string(),
            uploader: photo.uploader,
            caption: photo.caption,
            url: photo.url,
            like_count: photo.like_count,
            created_at: photo.created_at,
        }
    }
}

// ── GET /photos ──────────────────────────────────────────────────────────────

pub async fn list_photos(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<PhotoResponse>>, PartyServiceError> {
    let usecase = ListPhotosUseCase {
        photos: state.photo_repo(),
    };
    let photos = usecase.execute(page).await?;
    Ok(Json(photos.into_iter().map(Into::into).collect()))
}

// ── POST /photos/{id}/like ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ToggleLikeResponse {
    pub liked: bool,
    pub like_count: u64,
}

pub async fn toggle_like(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleLikeResponse>, PartyServiceError> {
    let usecase = ToggleLikeUseCase {
        photos: state.photo_repo(),
    };
    let output = usecase.execute(id, &player.name).await?;
    Ok(Json(ToggleLikeResponse {
        liked: output.liked,
        like_count: output.like_count,
    }))
}
