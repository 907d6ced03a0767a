use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hawktrivia_auth_types::identity::PlayerIdentity;

use crate::domain::types::FillMode;
use crate::error::SquaresServiceError;
use crate::handlers::EntryResponse;
use crate::state::AppState;
use crate::usecase::board::{BulkFillInput, BulkFillUseCase, ClaimSquareUseCase};

// ── POST /squares/{id}/claim ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ClaimSquareRequest {
    pub row: i32,
    pub col: i32,
}

pub async fn claim_square(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ClaimSquareRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), SquaresServiceError> {
    let usecase = ClaimSquareUseCase {
        games: state.game_repo(),
        entries: state.entry_repo(),
        audit: state.audit_repo(),
    };
    let entry = usecase
        .execute(id, body.row, body.col, &player.name)
        .await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

// ── POST /squares/{id}/fill ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BulkFillRequest {
    pub mode: String,
    pub house_name: Option<String>,
}

#[derive(Serialize)]
pub struct BulkFillResponse {
    pub filled: u64,
}

pub async fn bulk_fill(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<BulkFillRequest>,
) -> Result<Json<BulkFillResponse>, SquaresServiceError> {
    let mode = FillMode::parse(&body.mode).ok_or(SquaresServiceError::InvalidFillMode)?;
    let usecase = BulkFillUseCase {
        games: state.game_repo(),
        entries: state.entry_repo(),
        audit: state.audit_repo(),
    };
    let output = usecase
        .execute(
            id,
            &player.name,
            BulkFillInput {
                mode,
                house_name: body.house_name,
            },
        )
        .await?;
    Ok(Json(BulkFillResponse {
        filled: output.filled,
    }))
}
