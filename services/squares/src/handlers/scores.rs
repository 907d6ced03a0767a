use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hawktrivia_auth_types::identity::PlayerIdentity;

use crate::error::SquaresServiceError;
use crate::handlers::WinnerResponse;
use crate::state::AppState;
use crate::usecase::score::{
    ListWinnersUseCase, RecordScoreInput, RecordScoreOutput, RecordScoreUseCase,
    UndoScoreUseCase,
};

// ── POST /squares/{id}/score ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecordScoreRequest {
    pub quarter: u8,
    pub score_a: i32,
    pub score_b: i32,
}

#[derive(Serialize)]
pub struct RecordScoreResponse {
    pub quarter: u8,
    pub row_digit: u8,
    pub col_digit: u8,
    pub winning_row: i32,
    pub winning_col: i32,
    pub status: &'static str,
    /// Absent when the winning square was unclaimed.
    pub winner: Option<WinnerResponse>,
}

impl From<RecordScoreOutput> for RecordScoreResponse {
    fn from(output: RecordScoreOutput) -> Self {
        Self {
            quarter: output.quarter,
            row_digit: output.row_digit,
            col_digit: output.col_digit,
            winning_row: output.winning_row,
            winning_col: output.winning_col,
            status: output.status.as_str(),
            winner: output.winner.map(Into::into),
        }
    }
}

pub async fn record_score(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RecordScoreRequest>,
) -> Result<Json<RecordScoreResponse>, SquaresServiceError> {
    let usecase = RecordScoreUseCase {
        games: state.game_repo(),
        entries: state.entry_repo(),
        winners: state.winner_repo(),
        audit: state.audit_repo(),
    };
    let output = usecase
        .execute(
            id,
            &player.name,
            RecordScoreInput {
                quarter: body.quarter,
                score_a: body.score_a,
                score_b: body.score_b,
            },
        )
        .await?;
    Ok(Json(output.into()))
}

// ── DELETE /squares/{id}/score/{quarter} ─────────────────────────────────────

pub async fn undo_score(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Path((id, quarter)): Path<(Uuid, u8)>,
) -> Result<StatusCode, SquaresServiceError> {
    let usecase = UndoScoreUseCase {
        games: state.game_repo(),
        winners: state.winner_repo(),
        audit: state.audit_repo(),
    };
    usecase.execute(id, &player.name, quarter).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /squares/{id}/winners ────────────────────────────────────────────────

pub async fn list_winners(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<WinnerResponse>>, SquaresServiceError> {
    let usecase = ListWinnersUseCase {
        games: state.game_repo(),
        winners: state.winner_repo(),
    };
    let winners = usecase.execute(id).await?;
    Ok(Json(winners.into_iter().map(Into::into).collect()))
}
