use axum::{
    Router,
    routing::{delete, get, post},
};

use hawktrivia_core::health::{healthz, readyz};
use hawktrivia_core::middleware::request_id_layer;

use crate::handlers::{
    board::{bulk_fill, claim_square},
    games::{
        create_game, get_audit_log, get_game, get_game_by_code, list_games, lock_game,
        reshuffle_game,
    },
    scores::{list_winners, record_score, undo_score},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Games
        .route("/squares", post(create_game))
        .route("/squares", get(list_games))
        .route("/squares/{id}", get(get_game))
        .route("/squares/code/{share_code}", get(get_game_by_code))
        .route("/squares/{id}/lock", post(lock_game))
        .route("/squares/{id}/reshuffle", post(reshuffle_game))
        // Board
        .route("/squares/{id}/claim", post(claim_square))
        .route("/squares/{id}/fill", post(bulk_fill))
        // Scores
        .route("/squares/{id}/score", post(record_score))
        .route("/squares/{id}/score/{quarter}", delete(undo_score))
        .route("/squares/{id}/winners", get(list_winners))
        // Audit
        .route("/squares/{id}/audit", get(get_audit_log))
        .layer(request_id_layer())
        .with_state(state)
}
