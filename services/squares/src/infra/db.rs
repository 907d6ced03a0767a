use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, sea_query::OnConflict,
};
use uuid::Uuid;

use hawktrivia_domain::pagination::PageRequest;
use hawktrivia_squares_schema::{audit_log, entries, games, winners};

use crate::domain::repository::{
    AuditLogRepository, EntryRepository, GameRepository, WinnerRepository,
};
use crate::domain::types::{
    AuditLogEntry, Entry, Game, GameStatus, Quarter, QuarterScores, Winner,
};
use crate::error::SquaresServiceError;

// ── Game repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGameRepository {
    pub db: DatabaseConnection,
}

impl GameRepository for DbGameRepository {
    async fn create(&self, game: &Game) -> Result<(), SquaresServiceError> {
        games::ActiveModel {
            id: Set(game.id),
            name: Set(game.name.clone()),
            team_a: Set(game.team_a.clone()),
            team_b: Set(game.team_b.clone()),
            created_by: Set(game.created_by.clone()),
            status: Set(game.status.as_str().to_owned()),
            grid_size: Set(game.grid_size),
            entry_fee_cents: Set(game.entry_fee_cents),
            max_squares_per_player: Set(game.max_squares_per_player),
            share_code: Set(game.share_code.clone()),
            row_numbers: Set(game.row_numbers.as_deref().map(digits_to_json)),
            col_numbers: Set(game.col_numbers.as_deref().map(digits_to_json)),
            q1_score_a: Set(None),
            q1_score_b: Set(None),
            q2_score_a: Set(None),
            q2_score_b: Set(None),
            q3_score_a: Set(None),
            q3_score_b: Set(None),
            q4_score_a: Set(None),
            q4_score_b: Set(None),
            created_at: Set(game.created_at),
            updated_at: Set(game.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create game")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, SquaresServiceError> {
        let model = games::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find game by id")?;
        model.map(game_from_model).transpose()
    }

    async fn find_by_share_code(
        &self,
        code: &str,
    ) -> Result<Option<Game>, SquaresServiceError> {
        let model = games::Entity::find()
            .filter(games::Column::ShareCode.eq(code))
            .one(&self.db)
            .await
            .context("find game by share code")?;
        model.map(game_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Game>, SquaresServiceError> {
        let models = games::Entity::find()
            .order_by_desc(games::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list games")?;
        models.into_iter().map(game_from_model).collect()
    }

    async fn set_permutations(
        &self,
        id: Uuid,
        row_numbers: &[u8],
        col_numbers: &[u8],
        status: GameStatus,
    ) -> Result<(), SquaresServiceError> {
        games::ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_owned()),
            row_numbers: Set(Some(digits_to_json(row_numbers))),
            col_numbers: Set(Some(digits_to_json(col_numbers))),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set game permutations")?;
        Ok(())
    }

    async fn set_quarter_score(
        &self,
        id: Uuid,
        quarter: Quarter,
        score_a: i32,
        score_b: i32,
        status: GameStatus,
    ) -> Result<(), SquaresServiceError> {
        let mut am = games::ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        set_score_columns(&mut am, quarter, Some(score_a), Some(score_b));
        am.update(&self.db).await.context("set quarter score")?;
        Ok(())
    }

    async fn clear_quarter_score(
        &self,
        id: Uuid,
        quarter: Quarter,
        status: GameStatus,
    ) -> Result<(), SquaresServiceError> {
        let mut am = games::ActiveModel {
            id: Set(id),
            status: Set(status.as_str().to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        set_score_columns(&mut am, quarter, None, None);
        am.update(&self.db).await.context("clear quarter score")?;
        Ok(())
    }
}

fn set_score_columns(
    am: &mut games::ActiveModel,
    quarter: Quarter,
    score_a: Option<i32>,
    score_b: Option<i32>,
) {
    match quarter.number() {
        1 => {
            am.q1_score_a = Set(score_a);
            am.q1_score_b = Set(score_b);
        }
        2 => {
            am.q2_score_a = Set(score_a);
            am.q2_score_b = Set(score_b);
        }
        3 => {
            am.q3_score_a = Set(score_a);
            am.q3_score_b = Set(score_b);
        }
        // Quarter is validated to 1–4 at construction.
        _ => {
            am.q4_score_a = Set(score_a);
            am.q4_score_b = Set(score_b);
        }
    }
}

fn digits_to_json(digits: &[u8]) -> serde_json::Value {
    serde_json::json!(digits)
}

fn digits_from_json(value: serde_json::Value) -> Result<Vec<u8>, SquaresServiceError> {
    let digits: Vec<u8> =
        serde_json::from_value(value).context("parse stored digit sequence")?;
    Ok(digits)
}

fn score_pair(a: Option<i32>, b: Option<i32>) -> Option<(i32, i32)> {
    Some((a?, b?))
}

fn game_from_model(model: games::Model) -> Result<Game, SquaresServiceError> {
    let status = GameStatus::parse(&model.status)
        .ok_or_else(|| anyhow!("unknown game status {:?}", model.status))?;
    Ok(Game {
        id: model.id,
        name: model.name,
        team_a: model.team_a,
        team_b: model.team_b,
        created_by: model.created_by,
        status,
        grid_size: model.grid_size,
        entry_fee_cents: model.entry_fee_cents,
        max_squares_per_player: model.max_squares_per_player,
        share_code: model.share_code,
        row_numbers: model.row_numbers.map(digits_from_json).transpose()?,
        col_numbers: model.col_numbers.map(digits_from_json).transpose()?,
        scores: QuarterScores::from_pairs([
            score_pair(model.q1_score_a, model.q1_score_b),
            score_pair(model.q2_score_a, model.q2_score_b),
            score_pair(model.q3_score_a, model.q3_score_b),
            score_pair(model.q4_score_a, model.q4_score_b),
        ]),
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Entry repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEntryRepository {
    pub db: DatabaseConnection,
}

impl EntryRepository for DbEntryRepository {
    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Entry>, SquaresServiceError> {
        let models = entries::Entity::find()
            .filter(entries::Column::GameId.eq(game_id))
            .order_by_asc(entries::Column::Row)
            .order_by_asc(entries::Column::Col)
            .all(&self.db)
            .await
            .context("list entries by game")?;
        Ok(models.into_iter().map(entry_from_model).collect())
    }

    async fn find(
        &self,
        game_id: Uuid,
        row: i32,
        col: i32,
    ) -> Result<Option<Entry>, SquaresServiceError> {
        let model = entries::Entity::find_by_id((game_id, row, col))
            .one(&self.db)
            .await
            .context("find entry")?;
        Ok(model.map(entry_from_model))
    }

    async fn insert(&self, entry: &Entry) -> Result<bool, SquaresServiceError> {
        // DO NOTHING on the composite key: a lost race inserts zero rows
        // instead of erroring, and the original claim is untouched.
        let inserted = entries::Entity::insert(entry_to_active_model(entry))
            .on_conflict(
                OnConflict::columns([
                    entries::Column::GameId,
                    entries::Column::Row,
                    entries::Column::Col,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert entry")?;
        Ok(inserted > 0)
    }

    async fn insert_many(&self, batch: &[Entry]) -> Result<u64, SquaresServiceError> {
        if batch.is_empty() {
            return Ok(0);
        }
        let models = batch.iter().map(entry_to_active_model);
        let inserted = entries::Entity::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entries::Column::GameId,
                    entries::Column::Row,
                    entries::Column::Col,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert entries")?;
        Ok(inserted)
    }

    async fn count_by_player(
        &self,
        game_id: Uuid,
        player_name: &str,
    ) -> Result<u64, SquaresServiceError> {
        let count = entries::Entity::find()
            .filter(entries::Column::GameId.eq(game_id))
            .filter(entries::Column::PlayerName.eq(player_name))
            .count(&self.db)
            .await
            .context("count entries by player")?;
        Ok(count)
    }
}

fn entry_to_active_model(entry: &Entry) -> entries::ActiveModel {
    entries::ActiveModel {
        game_id: Set(entry.game_id),
        row: Set(entry.row),
        col: Set(entry.col),
        player_name: Set(entry.player_name.clone()),
        claimed_at: Set(entry.claimed_at),
    }
}

fn entry_from_model(model: entries::Model) -> Entry {
    Entry {
        game_id: model.game_id,
        row: model.row,
        col: model.col,
        player_name: model.player_name,
        claimed_at: model.claimed_at,
    }
}

// ── Winner repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWinnerRepository {
    pub db: DatabaseConnection,
}

impl WinnerRepository for DbWinnerRepository {
    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Winner>, SquaresServiceError> {
        let models = winners::Entity::find()
            .filter(winners::Column::GameId.eq(game_id))
            .order_by_asc(winners::Column::Quarter)
            .all(&self.db)
            .await
            .context("list winners by game")?;
        Ok(models.into_iter().map(winner_from_model).collect())
    }

    async fn upsert(&self, winner: &Winner) -> Result<(), SquaresServiceError> {
        let model = winners::ActiveModel {
            game_id: Set(winner.game_id),
            quarter: Set(winner.quarter as i16),
            row: Set(winner.row),
            col: Set(winner.col),
            row_digit: Set(winner.row_digit as i16),
            col_digit: Set(winner.col_digit as i16),
            player_name: Set(winner.player_name.clone()),
            created_at: Set(winner.created_at),
        };
        winners::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([winners::Column::GameId, winners::Column::Quarter])
                    .update_columns([
                        winners::Column::Row,
                        winners::Column::Col,
                        winners::Column::RowDigit,
                        winners::Column::ColDigit,
                        winners::Column::PlayerName,
                        winners::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert winner")?;
        Ok(())
    }

    async fn delete(
        &self,
        game_id: Uuid,
        quarter: Quarter,
    ) -> Result<bool, SquaresServiceError> {
        let result = winners::Entity::delete_many()
            .filter(winners::Column::GameId.eq(game_id))
            .filter(winners::Column::Quarter.eq(quarter.number() as i16))
            .exec(&self.db)
            .await
            .context("delete winner")?;
        Ok(result.rows_affected > 0)
    }
}

fn winner_from_model(model: winners::Model) -> Winner {
    Winner {
        game_id: model.game_id,
        quarter: model.quarter as u8,
        row: model.row,
        col: model.col,
        row_digit: model.row_digit as u8,
        col_digit: model.col_digit as u8,
        player_name: model.player_name,
        created_at: model.created_at,
    }
}

// ── Audit log repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuditLogRepository {
    pub db: DatabaseConnection,
}

impl AuditLogRepository for DbAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> Result<(), SquaresServiceError> {
        audit_log::ActiveModel {
            id: Set(entry.id),
            game_id: Set(entry.game_id),
            action: Set(entry.action.clone()),
            details: Set(entry.details.clone()),
            actor: Set(entry.actor.clone()),
            created_at: Set(entry.created_at),
        }
        .insert(&self.db)
        .await
        .context("append audit log entry")?;
        Ok(())
    }

    async fn list_by_game(
        &self,
        game_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<AuditLogEntry>, SquaresServiceError> {
        let models = audit_log::Entity::find()
            .filter(audit_log::Column::GameId.eq(game_id))
            .order_by_desc(audit_log::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list audit log by game")?;
        Ok(models.into_iter().map(audit_from_model).collect())
    }
}

fn audit_from_model(model: audit_log::Model) -> AuditLogEntry {
    AuditLogEntry {
        id: model.id,
        game_id: model.game_id,
        action: model.action,
        details: model.details,
        actor: model.actor,
        created_at: model.created_at,
    }
}
