use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Party service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum PartyServiceError {
    #[error("invalid admin secret")]
    InvalidSecret,
    #[error("invalid or expired admin token")]
    InvalidToken,
    #[error("user not found")]
    UserNotFound,
    #[error("question not found")]
    QuestionNotFound,
    #[error("photo not found")]
    PhotoNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid user name")]
    InvalidName,
    #[error("invalid answer")]
    InvalidAnswer,
    #[error("live round is not running")]
    RoundNotLive,
    #[error("scores are locked")]
    ScoresLocked,
    #[error("store is not configured")]
    StoreUnavailable,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PartyServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSecret => "INVALID_SECRET",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::PhotoNotFound => "PHOTO_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidAnswer => "INVALID_ANSWER",
            Self::RoundNotLive => "ROUND_NOT_LIVE",
            Self::ScoresLocked => "SCORES_LOCKED",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PartyServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidSecret | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::UserNotFound | Self::QuestionNotFound | Self::PhotoNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidName | Self::InvalidAnswer | Self::RoundNotLive | Self::ScoresLocked => {
                StatusCode::BAD_REQUEST
            }
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
