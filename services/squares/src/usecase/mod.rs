use chrono::Utc;
use uuid::Uuid;

use crate::domain::types::AuditLogEntry;

pub mod board;
pub mod game;
pub mod score;

/// Build an audit record for a board mutation.
pub(crate) fn audit_entry(
    game_id: Uuid,
    action: &str,
    details: serde_json::Value,
    actor: &str,
) -> AuditLogEntry {
    AuditLogEntry {
        id: Uuid::now_v7(),
        game_id,
        action: action.to_owned(),
        details,
        actor: actor.to_owned(),
        created_at: Utc::now(),
    }
}
