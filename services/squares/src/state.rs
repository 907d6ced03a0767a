use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAuditLogRepository, DbEntryRepository, DbGameRepository, DbWinnerRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn game_repo(&self) -> DbGameRepository {
        DbGameRepository {
            db: self.db.clone(),
        }
    }

    pub fn entry_repo(&self) -> DbEntryRepository {
        DbEntryRepository {
            db: self.db.clone(),
        }
    }

    pub fn winner_repo(&self) -> DbWinnerRepository {
        DbWinnerRepository {
            db: self.db.clone(),
        }
    }

    pub fn audit_repo(&self) -> DbAuditLogRepository {
        DbAuditLogRepository {
            db: self.db.clone(),
        }
    }
}
