use std::sync::Arc;

use sea_orm::DatabaseConnection;

use hawktrivia_core::cache::TimedSlot;

use crate::domain::types::LeaderboardRow;
use crate::error::PartyServiceError;
use crate::infra::db::{
    DbAdminActionRepository, DbLiveStateRepository, DbQuestionRepository, DbScoreRepository,
    DbUserRepository,
};
use crate::infra::demo::PhotoBackend;
use crate::infra::session::SessionBackend;

/// Shared application state passed to every handler via axum `State`.
///
/// `db` is `None` in demo mode (no `DATABASE_URL`); store-backed repo
/// accessors then fail with `StoreUnavailable`, while photos fall back to
/// the in-memory demo set.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<DatabaseConnection>,
    pub sessions: SessionBackend,
    pub photos: PhotoBackend,
    pub admin_secret: String,
    pub leaderboard_cache: Arc<TimedSlot<Vec<LeaderboardRow>>>,
}

impl AppState {
    fn db(&self) -> Result<DatabaseConnection, PartyServiceError> {
        self.db.clone().ok_or(PartyServiceError::StoreUnavailable)
    }

    pub fn user_repo(&self) -> Result<DbUserRepository, PartyServiceError> {
        Ok(DbUserRepository { db: self.db()? })
    }

    pub fn question_repo(&self) -> Result<DbQuestionRepository, PartyServiceError> {
        Ok(DbQuestionRepository { db: self.db()? })
    }

    pub fn score_repo(&self) -> Result<DbScoreRepository, PartyServiceError> {
        Ok(DbScoreRepository { db: self.db()? })
    }

    pub fn live_state_repo(&self) -> Result<DbLiveStateRepository, PartyServiceError> {
        Ok(DbLiveStateRepository { db: self.db()? })
    }

    pub fn admin_action_repo(&self) -> Result<DbAdminActionRepository, PartyServiceError> {
        Ok(DbAdminActionRepository { db: self.db()? })
    }

    pub fn photo_repo(&self) -> PhotoBackend {
        self.photos.clone()
    }
}
