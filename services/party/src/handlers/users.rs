use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use hawktrivia_auth_types::admin::AdminCredential;

use crate::domain::types::User;
use crate::error::PartyServiceError;
use crate::handlers::admin::authorize;
use crate::state::AppState;
use crate::usecase::user::{
    RegisterUserInput, RegisterUserUseCase, ResetScoreUseCase, SignInUseCase,
};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    #[serde(serialize_with = "hawktrivia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            team: user.team,
            created_at: user.created_at,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub team: Option<String>,
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), PartyServiceError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo()?,
    };
    let user = usecase
        .execute(RegisterUserInput {
            name: body.name,
            team: body.team,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /users/sign-in ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInRequest {
    pub name: String,
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<UserResponse>, PartyServiceError> {
    let usecase = SignInUseCase {
        users: state.user_repo()?,
    };
    let user = usecase.execute(body.name.trim()).await?;
    Ok(Json(user.into()))
}

// ── POST /users/{name}/reset ─────────────────────────────────────────────────

pub async fn reset_score(
    credential: AdminCredential,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, PartyServiceError> {
    authorize(&state, &credential).await?;
    let usecase = ResetScoreUseCase {
        users: state.user_repo()?,
        scores: state.score_repo()?,
        actions: state.admin_action_repo()?,
    };
    usecase.execute(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
