use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::types::{LeaderboardRow, TeamLeaderboardRow};
use crate::error::PartyServiceError;
use crate::state::AppState;
use crate::usecase::leaderboard::{GetLeaderboardUseCase, GetTeamLeaderboardUseCase};

#[derive(Serialize)]
pub struct LeaderboardEntryResponse {
    pub rank: usize,
    pub name: String,
    pub team: Option<String>,
    pub points: i32,
}

#[derive(Serialize)]
pub struct TeamLeaderboardEntryResponse {
    pub rank: usize,
    pub team: String,
    pub points: i64,
}

// ── GET /leaderboard ─────────────────────────────────────────────────────────

pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntryResponse>>, PartyServiceError> {
    let usecase = GetLeaderboardUseCase {
        scores: state.score_repo()?,
        cache: state.leaderboard_cache.clone(),
    };
    let rows = usecase.execute().await?;
    Ok(Json(ranked(rows)))
}

fn ranked(rows: Vec<LeaderboardRow>) -> Vec<LeaderboardEntryResponse> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| LeaderboardEntryResponse {
            rank: i + 1,
            name: row.name,
            team: row.team,
            points: row.points,
        })
        .collect()
}

// ── GET /leaderboard/teams ───────────────────────────────────────────────────

pub async fn get_team_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamLeaderboardEntryResponse>>, PartyServiceError> {
    let usecase = GetTeamLeaderboardUseCase {
        scores: state.score_repo()?,
    };
    let rows = usecase.execute().await?;
    Ok(Json(ranked_teams(rows)))
}

fn ranked_teams(rows: Vec<TeamLeaderboardRow>) -> Vec<TeamLeaderboardEntryResponse> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| TeamLeaderboardEntryResponse {
            rank: i + 1,
            team: row.team,
            points: row.points,
        })
        .collect()
}
