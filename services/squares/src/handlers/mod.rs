pub mod board;
pub mod games;
pub mod scores;

use serde::Serialize;

use crate::domain::types::{AuditLogEntry, Entry, Game, Winner};

// ── Shared response types ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct GameResponse {
    pub id: String,
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    pub created_by: String,
    pub status: &'static str,
    pub grid_size: i32,
    pub entry_fee_cents: Option<i32>,
    pub max_squares_per_player: Option<i32>,
    pub share_code: String,
    pub row_numbers: Option<Vec<u8>>,
    pub col_numbers: Option<Vec<u8>>,
    /// Quarter score pairs in order; `null` until entered.
    pub scores: [Option<(i32, i32)>; 4],
    #[serde(serialize_with = "hawktrivia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hawktrivia_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id.to_string(),
            name: game.name,
            team_a: game.team_a,
            team_b: game.team_b,
            created_by: game.created_by,
            status: game.status.as_str(),
            grid_size: game.grid_size,
            entry_fee_cents: game.entry_fee_cents,
            max_squares_per_player: game.max_squares_per_player,
            share_code: game.share_code,
            row_numbers: game.row_numbers,
            col_numbers: game.col_numbers,
            scores: game.scores.pairs(),
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct EntryResponse {
    pub row: i32,
    pub col: i32,
    pub player_name: String,
    #[serde(serialize_with = "hawktrivia_core::serde::to_rfc3339_ms")]
    pub claimed_at: chrono::DateTime<chrono::Utc>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            row: entry.row,
            col: entry.col,
            player_name: entry.player_name,
            claimed_at: entry.claimed_at,
        }
    }
}

#[derive(Serialize)]
pub struct WinnerResponse {
    pub quarter: u8,
    pub row: i32,
    pub col: i32,
    pub row_digit: u8,
    pub col_digit: u8,
    pub player_name: String,
    #[serde(serialize_with = "hawktrivia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Winner> for WinnerResponse {
    fn from(winner: Winner) -> Self {
        Self {
            quarter: winner.quarter,
            row: winner.row,
            col: winner.col,
            row_digit: winner.row_digit,
            col_digit: winner.col_digit,
            player_name: winner.player_name,
            created_at: winner.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AuditLogEntryResponse {
    pub action: String,
    pub details: serde_json::Value,
    pub actor: String,
    #[serde(serialize_with = "hawktrivia_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(entry: AuditLogEntry) -> Self {
        Self {
            action: entry.action,
            details: entry.details,
            actor: entry.actor,
            created_at: entry.created_at,
        }
    }
}
