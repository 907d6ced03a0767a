#![allow(async_fn_in_trait)]

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use hawktrivia_domain::pagination::PageRequest;

use crate::domain::types::{
    AdminAction, LeaderboardRow, LiveState, Photo, Question, TeamLeaderboardRow, User,
};
use crate::error::PartyServiceError;

/// Repository for guests.
pub trait UserRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, PartyServiceError>;

    async fn create(&self, user: &User) -> Result<(), PartyServiceError>;
}

/// Repository for trivia questions.
pub trait QuestionRepository: Send + Sync {
    /// Daily questions active on `date`, ordered by position.
    async fn list_daily(&self, date: NaiveDate) -> Result<Vec<Question>, PartyServiceError>;

    /// The live-round question at `position`, if one exists.
    async fn find_live_by_position(
        &self,
        position: i32,
    ) -> Result<Option<Question>, PartyServiceError>;

    async fn count_live(&self) -> Result<u64, PartyServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, PartyServiceError>;
}

/// Repository for trivia points.
pub trait ScoreRepository: Send + Sync {
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, PartyServiceError>;

    async fn team_leaderboard(&self) -> Result<Vec<TeamLeaderboardRow>, PartyServiceError>;

    /// Add points to a guest's total, creating the score row if needed.
    async fn add_points(&self, user_id: Uuid, delta: i32) -> Result<(), PartyServiceError>;

    /// Zero out a guest's total.
    async fn reset(&self, user_id: Uuid) -> Result<(), PartyServiceError>;
}

/// Repository for photos and their likes. Backed by the database, or by a
/// process-local demo map when no store is configured.
pub trait PhotoRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Photo>, PartyServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Photo>, PartyServiceError>;

    /// Toggle `user_name`'s like. Returns (now_liked, like_count).
    async fn toggle_like(
        &self,
        photo_id: Uuid,
        user_name: &str,
    ) -> Result<(bool, u64), PartyServiceError>;
}

/// Repository for the single live-round state row.
pub trait LiveStateRepository: Send + Sync {
    async fn get(&self) -> Result<LiveState, PartyServiceError>;

    async fn save(&self, state: &LiveState) -> Result<(), PartyServiceError>;
}

/// Append-only admin action trail.
pub trait AdminActionRepository: Send + Sync {
    async fn append(&self, action: &AdminAction) -> Result<(), PartyServiceError>;
}

/// Admin session token store. Process-local in-memory by default (tokens do
/// not survive a restart); optionally Redis-backed with the same TTL.
pub trait SessionStore: Send + Sync {
    /// Store a token with its creation time.
    async fn put(
        &self,
        token: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), PartyServiceError>;

    /// True when the token exists and is younger than the TTL. An expired
    /// token is purged as a side effect of the failed lookup (lazy expiry).
    async fn is_live(&self, token: &str) -> Result<bool, PartyServiceError>;

    /// Purge every expired token. Returns the number removed.
    async fn sweep(&self) -> Result<u64, PartyServiceError>;
}
