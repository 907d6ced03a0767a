//! Demo-mode photo storage, used when no database is configured.
//!
//! Likes live in a process-local map: non-persistent, single-process, and
//! intentionally uncoordinated beyond the map's own lock — matching the
//! throwaway semantics of demo mode. Everything resets on restart.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use hawktrivia_domain::pagination::PageRequest;

use crate::domain::repository::PhotoRepository;
use crate::domain::types::Photo;
use crate::error::PartyServiceError;

#[derive(Clone)]
pub struct MemoryPhotoRepository {
    photos: Arc<Vec<Photo>>,
    likes: Arc<Mutex<HashSet<(Uuid, String)>>>,
}

impl MemoryPhotoRepository {
    /// Canned photo set served when the store is unconfigured.
    pub fn demo() -> Self {
        let now = Utc::now();
        let photos = vec![
            Photo {
                id: Uuid::now_v7(),
                uploader: "hawktrivia".to_owned(),
                caption: Some("Kickoff crowd".to_owned()),
                url: "/demo/photos/kickoff.jpg".to_owned(),
                like_count: 0,
                created_at: now,
            },
            Photo {
                id: Uuid::now_v7(),
                uploader: "hawktrivia".to_owned(),
                caption: Some("Halftime snacks".to_owned()),
                url: "/demo/photos/snacks.jpg".to_owned(),
                like_count: 0,
                created_at: now,
            },
            Photo {
                id: Uuid::now_v7(),
                uploader: "hawktrivia".to_owned(),
                caption: None,
                url: "/demo/photos/scoreboard.jpg".to_owned(),
                like_count: 0,
                created_at: now,
            },
        ];
        Self {
            photos: Arc::new(photos),
            likes: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    fn count_likes(&self, photo_id: Uuid) -> u64 {
        self.likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == photo_id)
            .count() as u64
    }
}

impl PhotoRepository for MemoryPhotoRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Photo>, PartyServiceError> {
        let photos = self
            .photos
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|photo| Photo {
                like_count: self.count_likes(photo.id),
                ..photo.clone()
            })
            .collect();
        Ok(photos)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Photo>, PartyServiceError> {
        Ok(self.photos.iter().find(|p| p.id == id).map(|photo| Photo {
            like_count: self.count_likes(photo.id),
            ..photo.clone()
        }))
    }

    async fn toggle_like(
        &self,
        photo_id: Uuid,
        user_name: &str,
    ) -> Result<(bool, u64), PartyServiceError> {
        let key = (photo_id, user_name.to_owned());
        let liked = {
            let mut likes = self.likes.lock().unwrap();
            if likes.remove(&key) {
                false
            } else {
                likes.insert(key);
                true
            }
        };
        Ok((liked, self.count_likes(photo_id)))
    }
}

/// Photo backend chosen at startup: the database when configured, the demo
/// set otherwise.
#[derive(Clone)]
pub enum PhotoBackend {
    Db(super::db::DbPhotoRepository),
    Demo(MemoryPhotoRepository),
}

impl PhotoRepository for PhotoBackend {
    async fn list(&self, page: PageRequest) -> Result<Vec<Photo>, PartyServiceError> {
        match self {
            Self::Db(repo) => repo.list(page).await,
            Self::Demo(repo) => repo.list(page).await,
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Photo>, PartyServiceError> {
        match self {
            Self::Db(repo) => repo.find_by_id(id).await,
            Self::Demo(repo) => repo.find_by_id(id).await,
        }
    }

    async fn toggle_like(
        &self,
        photo_id: Uuid,
        user_name: &str,
    ) -> Result<(bool, u64), PartyServiceError> {
        match self {
            Self::Db(repo) => repo.toggle_like(photo_id, user_name).await,
            Self::Demo(repo) => repo.toggle_like(photo_id, user_name).await,
        }
    }
}
