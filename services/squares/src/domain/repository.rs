#![allow(async_fn_in_trait)]

use uuid::Uuid;

use hawktrivia_domain::pagination::PageRequest;

use crate::domain::types::{AuditLogEntry, Entry, Game, GameStatus, Quarter, Winner};
use crate::error::SquaresServiceError;

/// Repository for squares boards.
pub trait GameRepository: Send + Sync {
    async fn create(&self, game: &Game) -> Result<(), SquaresServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, SquaresServiceError>;

    async fn find_by_share_code(&self, code: &str) -> Result<Option<Game>, SquaresServiceError>;

    async fn list(&self, page: PageRequest) -> Result<Vec<Game>, SquaresServiceError>;

    /// Store freshly shuffled digit permutations and the new status.
    async fn set_permutations(
        &self,
        id: Uuid,
        row_numbers: &[u8],
        col_numbers: &[u8],
        status: GameStatus,
    ) -> Result<(), SquaresServiceError>;

    /// Record one quarter's score pair and the resulting status.
    async fn set_quarter_score(
        &self,
        id: Uuid,
        quarter: Quarter,
        score_a: i32,
        score_b: i32,
        status: GameStatus,
    ) -> Result<(), SquaresServiceError>;

    /// Unset one quarter's score pair and store the recomputed status.
    async fn clear_quarter_score(
        &self,
        id: Uuid,
        quarter: Quarter,
        status: GameStatus,
    ) -> Result<(), SquaresServiceError>;
}

/// Repository for claimed cells.
pub trait EntryRepository: Send + Sync {
    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Entry>, SquaresServiceError>;

    async fn find(
        &self,
        game_id: Uuid,
        row: i32,
        col: i32,
    ) -> Result<Option<Entry>, SquaresServiceError>;

    /// Insert a claim. Returns `false` when the cell is already taken
    /// (conflict resolution is left to the store's key, not a pre-read).
    async fn insert(&self, entry: &Entry) -> Result<bool, SquaresServiceError>;

    /// Insert many claims at once (bulk fill). Cells already taken by a
    /// concurrent claim are skipped; returns the number actually inserted.
    async fn insert_many(&self, entries: &[Entry]) -> Result<u64, SquaresServiceError>;

    async fn count_by_player(
        &self,
        game_id: Uuid,
        player_name: &str,
    ) -> Result<u64, SquaresServiceError>;
}

/// Repository for per-quarter winners.
pub trait WinnerRepository: Send + Sync {
    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Winner>, SquaresServiceError>;

    /// Insert or replace the winner for (game, quarter).
    async fn upsert(&self, winner: &Winner) -> Result<(), SquaresServiceError>;

    /// Delete the winner for (game, quarter). Returns `true` if one existed.
    async fn delete(&self, game_id: Uuid, quarter: Quarter) -> Result<bool, SquaresServiceError>;
}

/// Append-only audit trail.
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, entry: &AuditLogEntry) -> Result<(), SquaresServiceError>;

    async fn list_by_game(
        &self,
        game_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<AuditLogEntry>, SquaresServiceError>;
}
