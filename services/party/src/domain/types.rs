use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Registered party guest.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub team: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Which round a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionRound {
    Daily,
    Live,
}

impl QuestionRound {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Live => "live",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "live" => Some(Self::Live),
            _ => None,
        }
    }
}

/// Trivia question.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: Uuid,
    pub round: QuestionRound,
    pub position: i32,
    pub text: String,
    pub options: Vec<String>,
    pub answer_index: i32,
    pub points: i32,
    pub active_date: Option<NaiveDate>,
}

/// One leaderboard row: a guest and their points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub name: String,
    pub team: Option<String>,
    pub points: i32,
}

/// Points aggregated over a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLeaderboardRow {
    pub team: String,
    pub points: i64,
}

/// Shared party photo with its like count.
#[derive(Debug, Clone)]
pub struct Photo {
    pub id: Uuid,
    pub uploader: String,
    pub caption: Option<String>,
    pub url: String,
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
}

/// The live trivia round flags (single persisted row).
#[derive(Debug, Clone, Copy)]
pub struct LiveState {
    pub live: bool,
    pub paused: bool,
    pub ended: bool,
    pub current_question: i32,
    pub scores_locked: bool,
}

impl Default for LiveState {
    fn default() -> Self {
        Self {
            live: false,
            paused: false,
            ended: false,
            current_question: 0,
            scores_locked: false,
        }
    }
}

/// Append-only record of an admin mutation.
#[derive(Debug, Clone)]
pub struct AdminAction {
    pub id: Uuid,
    pub action: String,
    pub details: serde_json::Value,
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

/// Admin session lifetime.
pub const ADMIN_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Leaderboard cache lifetime.
pub const LEADERBOARD_CACHE_TTL_SECS: u64 = 30;
