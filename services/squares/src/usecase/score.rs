use anyhow::anyhow;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::domain::grid;
use crate::domain::repository::{
    AuditLogRepository, EntryRepository, GameRepository, WinnerRepository,
};
use crate::domain::types::{GameStatus, Quarter, Winner};
use crate::error::SquaresServiceError;
use crate::usecase::{audit_entry, game::find_owned_game};

// ── RecordScore ──────────────────────────────────────────────────────────────

pub struct RecordScoreInput {
    pub quarter: u8,
    pub score_a: i32,
    pub score_b: i32,
}

#[derive(Debug, Clone)]
pub struct RecordScoreOutput {
    pub quarter: u8,
    pub row_digit: u8,
    pub col_digit: u8,
    pub winning_row: i32,
    pub winning_col: i32,
    pub status: GameStatus,
    /// `None` when the winning cell is unclaimed — a valid outcome.
    pub winner: Option<Winner>,
}

pub struct RecordScoreUseCase<
    G: GameRepository,
    E: EntryRepository,
    W: WinnerRepository,
    L: AuditLogRepository,
> {
    pub games: G,
    pub entries: E,
    pub winners: W,
    pub audit: L,
}

impl<G: GameRepository, E: EntryRepository, W: WinnerRepository, L: AuditLogRepository>
    RecordScoreUseCase<G, E, W, L>
{
    pub async fn execute(
        &self,
        game_id: Uuid,
        actor: &str,
        input: RecordScoreInput,
    ) -> Result<RecordScoreOutput, SquaresServiceError> {
        let quarter =
            Quarter::new(input.quarter).ok_or(SquaresServiceError::InvalidQuarter)?;
        if input.score_a < 0 || input.score_b < 0 {
            return Err(SquaresServiceError::InvalidScore);
        }

        let game = find_owned_game(&self.games, game_id, actor).await?;
        if game.status == GameStatus::Open {
            return Err(SquaresServiceError::BoardNotLocked);
        }
        let row_numbers = game
            .row_numbers
            .as_deref()
            .ok_or(SquaresServiceError::DigitsNotAssigned)?;
        let col_numbers = game
            .col_numbers
            .as_deref()
            .ok_or(SquaresServiceError::DigitsNotAssigned)?;

        let row_digit = grid::score_digit(input.score_a);
        let col_digit = grid::score_digit(input.score_b);
        let (winning_row, winning_col) =
            grid::winning_cell(row_numbers, col_numbers, input.score_a, input.score_b)
                .ok_or_else(|| anyhow!("stored digit sequences are not permutations"))?;

        let status = if quarter.is_final() {
            GameStatus::Completed
        } else {
            GameStatus::InProgress
        };
        self.games
            .set_quarter_score(game_id, quarter, input.score_a, input.score_b, status)
            .await?;

        // A second record for the same quarter replaces the prior winner
        // via the (game, quarter) upsert key.
        let entry = self.entries.find(game_id, winning_row, winning_col).await?;
        let winner = match entry {
            Some(entry) => {
                let winner = Winner {
                    game_id,
                    quarter: quarter.number(),
                    row: winning_row,
                    col: winning_col,
                    row_digit,
                    col_digit,
                    player_name: entry.player_name,
                    created_at: Utc::now(),
                };
                self.winners.upsert(&winner).await?;
                Some(winner)
            }
            None => None,
        };

        self.audit
            .append(&audit_entry(
                game_id,
                "record_score",
                json!({
                    "quarter": quarter.number(),
                    "score_a": input.score_a,
                    "score_b": input.score_b,
                    "winner": winner.as_ref().map(|w| w.player_name.clone()),
                }),
                actor,
            ))
            .await?;

        Ok(RecordScoreOutput {
            quarter: quarter.number(),
            row_digit,
            col_digit,
            winning_row,
            winning_col,
            status,
            winner,
        })
    }
}

// ── UndoScore ────────────────────────────────────────────────────────────────

pub struct UndoScoreUseCase<G: GameRepository, W: WinnerRepository, L: AuditLogRepository> {
    pub games: G,
    pub winners: W,
    pub audit: L,
}

impl<G: GameRepository, W: WinnerRepository, L: AuditLogRepository> UndoScoreUseCase<G, W, L> {
    pub async fn execute(
        &self,
        game_id: Uuid,
        actor: &str,
        quarter: u8,
    ) -> Result<(), SquaresServiceError> {
        let quarter = Quarter::new(quarter).ok_or(SquaresServiceError::InvalidQuarter)?;
        find_owned_game(&self.games, game_id, actor).await?;

        // Undoing the opener reverts to a locked board; undoing any later
        // quarter leaves the game mid-flight. An overwritten earlier winner
        // is gone for good — the audit log is the only surviving record.
        let status = if quarter.is_first() {
            GameStatus::Locked
        } else {
            GameStatus::InProgress
        };
        self.games
            .clear_quarter_score(game_id, quarter, status)
            .await?;
        let winner_removed = self.winners.delete(game_id, quarter).await?;

        self.audit
            .append(&audit_entry(
                game_id,
                "undo_score",
                json!({ "quarter": quarter.number(), "winner_removed": winner_removed }),
                actor,
            ))
            .await?;
        Ok(())
    }
}

// ── ListWinners ──────────────────────────────────────────────────────────────

pub struct ListWinnersUseCase<G: GameRepository, W: WinnerRepository> {
    pub games: G,
    pub winners: W,
}

impl<G: GameRepository, W: WinnerRepository> ListWinnersUseCase<G, W> {
    pub async fn execute(&self, game_id: Uuid) -> Result<Vec<Winner>, SquaresServiceError> {
        if self.games.find_by_id(game_id).await?.is_none() {
            return Err(SquaresServiceError::GameNotFound);
        }
        self.winners.list_by_game(game_id).await
    }
}
