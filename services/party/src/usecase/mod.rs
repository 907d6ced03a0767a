use chrono::Utc;
use uuid::Uuid;

use crate::domain::types::AdminAction;

pub mod admin;
pub mod leaderboard;
pub mod live;
pub mod photo;
pub mod trivia;
pub mod user;

/// Build an admin-trail record for a mutation to the live round.
pub(crate) fn admin_action(action: &str, details: serde_json::Value) -> AdminAction {
    AdminAction {
        id: Uuid::now_v7(),
        action: action.to_owned(),
        details,
        actor: "admin".to_owned(),
        created_at: Utc::now(),
    }
}
