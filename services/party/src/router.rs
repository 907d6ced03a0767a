use axum::{
    Router,
    routing::{get, post},
};

use hawktrivia_core::health::{healthz, readyz};
use hawktrivia_core::middleware::request_id_layer;

use crate::handlers::{
    admin::{advance_question, end_round, login, pause_round, resume_round, start_round, verify},
    leaderboard::{get_leaderboard, get_team_leaderboard},
    photos::{list_photos, toggle_like},
    trivia::{get_daily_questions, get_live_question, submit_answer},
    users::{register_user, reset_score, sign_in},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Admin
        .route("/admin/login", post(login))
        .route("/admin/verify", get(verify))
        .route("/admin/live/start", post(start_round))
        .route("/admin/live/pause", post(pause_round))
        .route("/admin/live/resume", post(resume_round))
        .route("/admin/live/advance", post(advance_question))
        .route("/admin/live/end", post(end_round))
        // Trivia
        .route("/trivia/daily", get(get_daily_questions))
        .route("/trivia/live", get(get_live_question))
        .route("/trivia/answer", post(submit_answer))
        // Leaderboard
        .route("/leaderboard", get(get_leaderboard))
        .route("/leaderboard/teams", get(get_team_leaderboard))
        // Photos
        .route("/photos", get(list_photos))
        .route("/photos/{id}/like", post(toggle_like))
        // Users
        .route("/users", post(register_user))
        .route("/users/sign-in", post(sign_in))
        .route("/users/{name}/reset", post(reset_score))
        .layer(request_id_layer())
        .with_state(state)
}
