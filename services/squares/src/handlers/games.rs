use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hawktrivia_auth_types::identity::PlayerIdentity;
use hawktrivia_domain::pagination::PageRequest;

use crate::error::SquaresServiceError;
use crate::handlers::{AuditLogEntryResponse, EntryResponse, GameResponse, WinnerResponse};
use crate::state::AppState;
use crate::usecase::game::{
    CreateGameInput, CreateGameUseCase, GameDetail, GetAuditLogUseCase, GetGameUseCase,
    ListGamesUseCase, LockGameUseCase, ReshuffleUseCase,
};

#[derive(Serialize)]
pub struct GameDetailResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub entries: Vec<EntryResponse>,
    pub winners: Vec<WinnerResponse>,
}

impl From<GameDetail> for GameDetailResponse {
    fn from(detail: GameDetail) -> Self {
        Self {
            game: detail.game.into(),
            entries: detail.entries.into_iter().map(Into::into).collect(),
            winners: detail.winners.into_iter().map(Into::into).collect(),
        }
    }
}

// ── POST /squares ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    pub grid_size: Option<i32>,
    pub entry_fee_cents: Option<i32>,
    pub max_squares_per_player: Option<i32>,
}

pub async fn create_game(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), SquaresServiceError> {
    let usecase = CreateGameUseCase {
        games: state.game_repo(),
        audit: state.audit_repo(),
    };
    let game = usecase
        .execute(
            &player.name,
            CreateGameInput {
                name: body.name,
                team_a: body.team_a,
                team_b: body.team_b,
                grid_size: body.grid_size,
                entry_fee_cents: body.entry_fee_cents,
                max_squares_per_player: body.max_squares_per_player,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(game.into())))
}

// ── GET /squares ─────────────────────────────────────────────────────────────

pub async fn list_games(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<GameResponse>>, SquaresServiceError> {
    let usecase = ListGamesUseCase {
        games: state.game_repo(),
    };
    let games = usecase.execute(page).await?;
    Ok(Json(games.into_iter().map(Into::into).collect()))
}

// ── GET /squares/{id} ────────────────────────────────────────────────────────

pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameDetailResponse>, SquaresServiceError> {
    let usecase = GetGameUseCase {
        games: state.game_repo(),
        entries: state.entry_repo(),
        winners: state.winner_repo(),
    };
    let detail = usecase.execute(id).await?;
    Ok(Json(detail.into()))
}

// ── GET /squares/code/{share_code} ───────────────────────────────────────────

pub async fn get_game_by_code(
    State(state): State<AppState>,
    Path(share_code): Path<String>,
) -> Result<Json<GameDetailResponse>, SquaresServiceError> {
    let usecase = GetGameUseCase {
        games: state.game_repo(),
        entries: state.entry_repo(),
        winners: state.winner_repo(),
    };
    let detail = usecase.execute_by_code(&share_code).await?;
    Ok(Json(detail.into()))
}

// ── POST /squares/{id}/lock ──────────────────────────────────────────────────

pub async fn lock_game(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameResponse>, SquaresServiceError> {
    let usecase = LockGameUseCase {
        games: state.game_repo(),
        audit: state.audit_repo(),
    };
    let game = usecase.execute(id, &player.name).await?;
    Ok(Json(game.into()))
}

// ── POST /squares/{id}/reshuffle ─────────────────────────────────────────────

pub async fn reshuffle_game(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameResponse>, SquaresServiceError> {
    let usecase = ReshuffleUseCase {
        games: state.game_repo(),
        audit: state.audit_repo(),
    };
    let game = usecase.execute(id, &player.name).await?;
    Ok(Json(game.into()))
}

// ── GET /squares/{id}/audit ──────────────────────────────────────────────────

pub async fn get_audit_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<AuditLogEntryResponse>>, SquaresServiceError> {
    let usecase = GetAuditLogUseCase {
        games: state.game_repo(),
        audit: state.audit_repo(),
    };
    let log = usecase.execute(id, page).await?;
    Ok(Json(log.into_iter().map(Into::into).collect()))
}
