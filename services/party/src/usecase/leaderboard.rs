use std::sync::Arc;

use hawktrivia_core::cache::TimedSlot;

use crate::domain::repository::ScoreRepository;
use crate::domain::types::{LeaderboardRow, TeamLeaderboardRow};
use crate::error::PartyServiceError;

// ── GetLeaderboard ───────────────────────────────────────────────────────────

pub struct GetLeaderboardUseCase<S: ScoreRepository> {
    pub scores: S,
    pub cache: Arc<TimedSlot<Vec<LeaderboardRow>>>,
}

impl<S: ScoreRepository> GetLeaderboardUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<LeaderboardRow>, PartyServiceError> {
        if let Some(rows) = self.cache.get() {
            return Ok(rows);
        }
        // Miss: recompute outside the slot's lock. Two concurrent misses may
        // both run the query and both store; last write wins and the
        // duplicate work is accepted as harmless.
        let rows = self.scores.leaderboard().await?;
        self.cache.put(rows.clone());
        Ok(rows)
    }
}

// ── GetTeamLeaderboard ───────────────────────────────────────────────────────

pub struct GetTeamLeaderboardUseCase<S: ScoreRepository> {
    pub scores: S,
}

impl<S: ScoreRepository> GetTeamLeaderboardUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<TeamLeaderboardRow>, PartyServiceError> {
        self.scores.team_leaderboard().await
    }
}
