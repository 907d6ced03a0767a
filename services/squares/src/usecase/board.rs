use std::collections::BTreeSet;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::domain::grid;
use crate::domain::repository::{AuditLogRepository, EntryRepository, GameRepository};
use crate::domain::types::{DEFAULT_HOUSE_NAME, Entry, FillMode, GameStatus};
use crate::error::SquaresServiceError;
use crate::usecase::{audit_entry, game::find_owned_game};

// ── ClaimSquare ──────────────────────────────────────────────────────────────

pub struct ClaimSquareUseCase<G: GameRepository, E: EntryRepository, L: AuditLogRepository> {
    pub games: G,
    pub entries: E,
    pub audit: L,
}

impl<G: GameRepository, E: EntryRepository, L: AuditLogRepository> ClaimSquareUseCase<G, E, L> {
    pub async fn execute(
        &self,
        game_id: Uuid,
        row: i32,
        col: i32,
        player: &str,
    ) -> Result<Entry, SquaresServiceError> {
        let game = self
            .games
            .find_by_id(game_id)
            .await?
            .ok_or(SquaresServiceError::GameNotFound)?;
        if game.status != GameStatus::Open {
            return Err(SquaresServiceError::GameNotOpen);
        }
        if !(0..game.grid_size).contains(&row) || !(0..game.grid_size).contains(&col) {
            return Err(SquaresServiceError::SquareOutOfBounds);
        }

        if let Some(cap) = game.max_squares_per_player {
            let held = self.entries.count_by_player(game_id, player).await?;
            if held >= cap as u64 {
                return Err(SquaresServiceError::PlayerLimitReached);
            }
        }

        let entry = Entry {
            game_id,
            row,
            col,
            player_name: player.to_owned(),
            claimed_at: Utc::now(),
        };
        // The store's composite key is the authority on "already taken"; a
        // losing racer sees inserted == false and the original entry stays.
        let inserted = self.entries.insert(&entry).await?;
        if !inserted {
            return Err(SquaresServiceError::SquareTaken);
        }

        self.audit
            .append(&audit_entry(
                game_id,
                "claim_square",
                json!({ "row": row, "col": col, "player": player }),
                player,
            ))
            .await?;
        Ok(entry)
    }
}

// ── BulkFill ─────────────────────────────────────────────────────────────────

pub struct BulkFillInput {
    pub mode: FillMode,
    pub house_name: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct BulkFillOutput {
    pub filled: u64,
}

pub struct BulkFillUseCase<G: GameRepository, E: EntryRepository, L: AuditLogRepository> {
    pub games: G,
    pub entries: E,
    pub audit: L,
}

impl<G: GameRepository, E: EntryRepository, L: AuditLogRepository> BulkFillUseCase<G, E, L> {
    pub async fn execute(
        &self,
        game_id: Uuid,
        actor: &str,
        input: BulkFillInput,
    ) -> Result<BulkFillOutput, SquaresServiceError> {
        let game = find_owned_game(&self.games, game_id, actor).await?;
        if game.status != GameStatus::Open {
            return Err(SquaresServiceError::GameNotOpen);
        }

        let existing = self.entries.list_by_game(game_id).await?;
        let claimed: BTreeSet<(i32, i32)> = existing.iter().map(|e| (e.row, e.col)).collect();
        let empty = grid::empty_cells(game.grid_size, &claimed);

        let now = Utc::now();
        let batch: Vec<Entry> = match input.mode {
            FillMode::House => {
                let name = input
                    .house_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or(DEFAULT_HOUSE_NAME)
                    .to_owned();
                empty
                    .iter()
                    .map(|&(row, col)| Entry {
                        game_id,
                        row,
                        col,
                        player_name: name.clone(),
                        claimed_at: now,
                    })
                    .collect()
            }
            FillMode::RoundRobin => {
                let players: BTreeSet<String> =
                    existing.iter().map(|e| e.player_name.clone()).collect();
                if players.is_empty() {
                    return Err(SquaresServiceError::NoPlayersToFill);
                }
                grid::round_robin_assignments(&empty, &players)
                    .into_iter()
                    .map(|((row, col), name)| Entry {
                        game_id,
                        row,
                        col,
                        player_name: name.to_owned(),
                        claimed_at: now,
                    })
                    .collect()
            }
        };

        let filled = self.entries.insert_many(&batch).await?;
        self.audit
            .append(&audit_entry(
                game_id,
                "bulk_fill",
                json!({
                    "mode": match input.mode {
                        FillMode::House => "house",
                        FillMode::RoundRobin => "round_robin",
                    },
                    "filled": filled,
                }),
                actor,
            ))
            .await?;
        Ok(BulkFillOutput { filled })
    }
}
