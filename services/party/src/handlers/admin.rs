use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use hawktrivia_auth_types::admin::AdminCredential;

use crate::error::PartyServiceError;
use crate::handlers::LiveStateResponse;
use crate::state::AppState;
use crate::usecase::admin::{AuthorizeAdminUseCase, LoginUseCase};
use crate::usecase::live::{
    AdvanceQuestionUseCase, EndRoundUseCase, SetPausedUseCase, StartRoundUseCase,
};

/// Check the caller's admin credential (token first, then raw secret).
pub(crate) async fn authorize(
    state: &AppState,
    credential: &AdminCredential,
) -> Result<(), PartyServiceError> {
    let usecase = AuthorizeAdminUseCase {
        sessions: state.sessions.clone(),
        admin_secret: state.admin_secret.clone(),
    };
    usecase
        .execute(credential.token.as_deref(), credential.secret.as_deref())
        .await
}

// ── POST /admin/login ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub secret: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, PartyServiceError> {
    let usecase = LoginUseCase {
        sessions: state.sessions.clone(),
        admin_secret: state.admin_secret.clone(),
    };
    let token = usecase.execute(&body.secret).await?;
    Ok(Json(LoginResponse { token }))
}

// ── GET /admin/verify ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

pub async fn verify(
    credential: AdminCredential,
    State(state): State<AppState>,
) -> Result<Json<VerifyResponse>, PartyServiceError> {
    authorize(&state, &credential).await?;
    Ok(Json(VerifyResponse { valid: true }))
}

// ── POST /admin/live/start ───────────────────────────────────────────────────

pub async fn start_round(
    credential: AdminCredential,
    State(state): State<AppState>,
) -> Result<Json<LiveStateResponse>, PartyServiceError> {
    authorize(&state, &credential).await?;
    let usecase = StartRoundUseCase {
        live: state.live_state_repo()?,
        actions: state.admin_action_repo()?,
    };
    let live = usecase.execute().await?;
    Ok(Json(live.into()))
}

// ── POST /admin/live/pause and /admin/live/resume ────────────────────────────

pub async fn pause_round(
    credential: AdminCredential,
    State(state): State<AppState>,
) -> Result<Json<LiveStateResponse>, PartyServiceError> {
    authorize(&state, &credential).await?;
    let usecase = SetPausedUseCase {
        live: state.live_state_repo()?,
        actions: state.admin_action_repo()?,
    };
    let live = usecase.execute(true).await?;
    Ok(Json(live.into()))
}

pub async fn resume_round(
    credential: AdminCredential,
    State(state): State<AppState>,
) -> Result<Json<LiveStateResponse>, PartyServiceError> {
    authorize(&state, &credential).await?;
    let usecase = SetPausedUseCase {
        live: state.live_state_repo()?,
        actions: state.admin_action_repo()?,
    };
    let live = usecase.execute(false).await?;
    Ok(Json(live.into()))
}

// ── POST /admin/live/advance ─────────────────────────────────────────────────

pub async fn advance_question(
    credential: AdminCredential,
    State(state): State<AppState>,
) -> Result<Json<LiveStateResponse>, PartyServiceError> {
    authorize(&state, &credential).await?;
    let usecase = AdvanceQuestionUseCase {
        live: state.live_state_repo()?,
        actions: state.admin_action_repo()?,
    };
    let live = usecase.execute().await?;
    Ok(Json(live.into()))
}

// ── POST /admin/live/end ─────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct EndRoundRequest {
    #[serde(default)]
    pub lock_scores: bool,
}

pub async fn end_round(
    credential: AdminCredential,
    State(state): State<AppState>,
    body: Option<Json<EndRoundRequest>>,
) -> Result<Json<LiveStateResponse>, PartyServiceError> {
    authorize(&state, &credential).await?;
    let body = body.map(|Json(body)| body).unwrap_or_default();
    let usecase = EndRoundUseCase {
        live: state.live_state_repo()?,
        actions: state.admin_action_repo()?,
    };
    let live = usecase.execute(body.lock_scores).await?;
    Ok(Json(live.into()))
}
