use chrono::Utc;
use rand::RngExt;
use serde_json::json;
use uuid::Uuid;

use hawktrivia_domain::pagination::PageRequest;
use hawktrivia_domain::share_code::{SHARE_CODE_CHARSET, SHARE_CODE_LEN};

use crate::domain::grid;
use crate::domain::repository::{AuditLogRepository, EntryRepository, GameRepository, WinnerRepository};
use crate::domain::types::{
    DEFAULT_GRID_SIZE, Entry, Game, GameStatus, MAX_GRID_SIZE, MIN_GRID_SIZE, QuarterScores,
    Winner,
};
use crate::error::SquaresServiceError;
use crate::usecase::audit_entry;

fn generate_share_code() -> String {
    let mut rng = rand::rng();
    (0..SHARE_CODE_LEN)
        .map(|_| SHARE_CODE_CHARSET[rng.random_range(0..SHARE_CODE_CHARSET.len())] as char)
        .collect()
}

/// Load a game and enforce that `actor` created it.
pub(crate) async fn find_owned_game<G: GameRepository>(
    games: &G,
    id: Uuid,
    actor: &str,
) -> Result<Game, SquaresServiceError> {
    let game = games
        .find_by_id(id)
        .await?
        .ok_or(SquaresServiceError::GameNotFound)?;
    if !game.is_creator(actor) {
        return Err(SquaresServiceError::NotCreator);
    }
    Ok(game)
}

// ── CreateGame ───────────────────────────────────────────────────────────────

pub struct CreateGameInput {
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    pub grid_size: Option<i32>,
    pub entry_fee_cents: Option<i32>,
    pub max_squares_per_player: Option<i32>,
}

pub struct CreateGameUseCase<G: GameRepository, L: AuditLogRepository> {
    pub games: G,
    pub audit: L,
}

impl<G: GameRepository, L: AuditLogRepository> CreateGameUseCase<G, L> {
    pub async fn execute(
        &self,
        creator: &str,
        input: CreateGameInput,
    ) -> Result<Game, SquaresServiceError> {
        let name = input.name.trim().to_owned();
        let team_a = input.team_a.trim().to_owned();
        let team_b = input.team_b.trim().to_owned();
        if name.is_empty() || team_a.is_empty() || team_b.is_empty() {
            return Err(SquaresServiceError::InvalidGameData);
        }

        let grid_size = input.grid_size.unwrap_or(DEFAULT_GRID_SIZE);
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(SquaresServiceError::InvalidGameData);
        }
        if input.entry_fee_cents.is_some_and(|fee| fee < 0)
            || input.max_squares_per_player.is_some_and(|cap| cap < 1)
        {
            return Err(SquaresServiceError::InvalidGameData);
        }

        let now = Utc::now();
        let game = Game {
            id: Uuid::now_v7(),
            name,
            team_a,
            team_b,
            created_by: creator.to_owned(),
            status: GameStatus::Open,
            grid_size,
            entry_fee_cents: input.entry_fee_cents,
            max_squares_per_player: input.max_squares_per_player,
            share_code: generate_share_code(),
            row_numbers: None,
            col_numbers: None,
            scores: QuarterScores::default(),
            created_at: now,
            updated_at: now,
        };

        self.games.create(&game).await?;
        self.audit
            .append(&audit_entry(
                game.id,
                "create_game",
                json!({ "name": game.name, "grid_size": game.grid_size }),
                creator,
            ))
            .await?;
        Ok(game)
    }
}

// ── GetGame (detail view) ────────────────────────────────────────────────────

/// A game with everything a board view needs.
#[derive(Debug, Clone)]
pub struct GameDetail {
    pub game: Game,
    pub entries: Vec<Entry>,
    pub winners: Vec<Winner>,
}

pub struct GetGameUseCase<G: GameRepository, E: EntryRepository, W: WinnerRepository> {
    pub games: G,
    pub entries: E,
    pub winners: W,
}

impl<G: GameRepository, E: EntryRepository, W: WinnerRepository> GetGameUseCase<G, E, W> {
    pub async fn execute(&self, id: Uuid) -> Result<GameDetail, SquaresServiceError> {
        let game = self
            .games
            .find_by_id(id)
            .await?
            .ok_or(SquaresServiceError::GameNotFound)?;
        self.detail(game).await
    }

    pub async fn execute_by_code(&self, code: &str) -> Result<GameDetail, SquaresServiceError> {
        let game = self
            .games
            .find_by_share_code(code)
            .await?
            .ok_or(SquaresServiceError::GameNotFound)?;
        self.detail(game).await
    }

    async fn detail(&self, game: Game) -> Result<GameDetail, SquaresServiceError> {
        let entries = self.entries.list_by_game(game.id).await?;
        let winners = self.winners.list_by_game(game.id).await?;
        Ok(GameDetail {
            game,
            entries,
            winners,
        })
    }
}

// ── ListGames ────────────────────────────────────────────────────────────────

pub struct ListGamesUseCase<G: GameRepository> {
    pub games: G,
}

impl<G: GameRepository> ListGamesUseCase<G> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Game>, SquaresServiceError> {
        self.games.list(page).await
    }
}

// ── LockGame ─────────────────────────────────────────────────────────────────

pub struct LockGameUseCase<G: GameRepository, L: AuditLogRepository> {
    pub games: G,
    pub audit: L,
}

impl<G: GameRepository, L: AuditLogRepository> LockGameUseCase<G, L> {
    pub async fn execute(&self, id: Uuid, actor: &str) -> Result<Game, SquaresServiceError> {
        let mut game = find_owned_game(&self.games, id, actor).await?;
        if game.status != GameStatus::Open {
            return Err(SquaresServiceError::GameNotOpen);
        }

        let row_numbers = grid::shuffle_digits();
        let col_numbers = grid::shuffle_digits();

        self.games
            .set_permutations(id, &row_numbers, &col_numbers, GameStatus::Locked)
            .await?;
        self.audit
            .append(&audit_entry(
                id,
                "lock_board",
                json!({ "row_numbers": row_numbers, "col_numbers": col_numbers }),
                actor,
            ))
            .await?;

        game.status = GameStatus::Locked;
        game.row_numbers = Some(row_numbers);
        game.col_numbers = Some(col_numbers);
        Ok(game)
    }
}

// ── Reshuffle ────────────────────────────────────────────────────────────────

pub struct ReshuffleUseCase<G: GameRepository, L: AuditLogRepository> {
    pub games: G,
    pub audit: L,
}

impl<G: GameRepository, L: AuditLogRepository> ReshuffleUseCase<G, L> {
    pub async fn execute(&self, id: Uuid, actor: &str) -> Result<Game, SquaresServiceError> {
        let mut game = find_owned_game(&self.games, id, actor).await?;
        if game.status != GameStatus::Locked {
            return Err(SquaresServiceError::BoardNotLocked);
        }
        if game.scores.any_recorded() {
            return Err(SquaresServiceError::ScoresAlreadyRecorded);
        }

        let row_numbers = grid::shuffle_digits();
        let col_numbers = grid::shuffle_digits();

        // Status stays locked; only the digit assignments change.
        self.games
            .set_permutations(id, &row_numbers, &col_numbers, GameStatus::Locked)
            .await?;
        self.audit
            .append(&audit_entry(
                id,
                "reshuffle_board",
                json!({ "row_numbers": row_numbers, "col_numbers": col_numbers }),
                actor,
            ))
            .await?;

        game.row_numbers = Some(row_numbers);
        game.col_numbers = Some(col_numbers);
        Ok(game)
    }
}

// ── GetAuditLog ──────────────────────────────────────────────────────────────

pub struct GetAuditLogUseCase<G: GameRepository, L: AuditLogRepository> {
    pub games: G,
    pub audit: L,
}

impl<G: GameRepository, L: AuditLogRepository> GetAuditLogUseCase<G, L> {
    pub async fn execute(
        &self,
        id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<crate::domain::types::AuditLogEntry>, SquaresServiceError> {
        if self.games.find_by_id(id).await?.is_none() {
            return Err(SquaresServiceError::GameNotFound);
        }
        self.audit.list_by_game(id, page).await
    }
}
