use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Squares service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum SquaresServiceError {
    #[error("game not found")]
    GameNotFound,
    #[error("square already taken")]
    SquareTaken,
    #[error("player square limit reached")]
    PlayerLimitReached,
    #[error("only the game creator may do this")]
    NotCreator,
    #[error("game is not open")]
    GameNotOpen,
    #[error("board is not locked")]
    BoardNotLocked,
    #[error("board digits not assigned")]
    DigitsNotAssigned,
    #[error("scores already recorded")]
    ScoresAlreadyRecorded,
    #[error("no players to fill from")]
    NoPlayersToFill,
    #[error("square out of bounds")]
    SquareOutOfBounds,
    #[error("invalid quarter")]
    InvalidQuarter,
    #[error("invalid score")]
    InvalidScore,
    #[error("invalid fill mode")]
    InvalidFillMode,
    #[error("invalid game data")]
    InvalidGameData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SquaresServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::SquareTaken => "SQUARE_TAKEN",
            Self::PlayerLimitReached => "PLAYER_LIMIT_REACHED",
            Self::NotCreator => "NOT_CREATOR",
            Self::GameNotOpen => "GAME_NOT_OPEN",
            Self::BoardNotLocked => "BOARD_NOT_LOCKED",
            Self::DigitsNotAssigned => "DIGITS_NOT_ASSIGNED",
            Self::ScoresAlreadyRecorded => "SCORES_ALREADY_RECORDED",
            Self::NoPlayersToFill => "NO_PLAYERS_TO_FILL",
            Self::SquareOutOfBounds => "SQUARE_OUT_OF_BOUNDS",
            Self::InvalidQuarter => "INVALID_QUARTER",
            Self::InvalidScore => "INVALID_SCORE",
            Self::InvalidFillMode => "INVALID_FILL_MODE",
            Self::InvalidGameData => "INVALID_GAME_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for SquaresServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::GameNotFound => StatusCode::NOT_FOUND,
            Self::SquareTaken | Self::PlayerLimitReached => StatusCode::CONFLICT,
            Self::NotCreator => StatusCode::FORBIDDEN,
            Self::GameNotOpen
            | Self::BoardNotLocked
            | Self::DigitsNotAssigned
            | Self::ScoresAlreadyRecorded
            | Self::NoPlayersToFill
            | Self::SquareOutOfBounds
            | Self::InvalidQuarter
            | Self::InvalidScore
            | Self::InvalidFillMode
            | Self::InvalidGameData => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
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
