use anyhow::{Context as _, anyhow};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::OnConflict,
};
use uuid::Uuid;

use hawktrivia_domain::pagination::PageRequest;
use hawktrivia_party_schema::{
    admin_actions, live_state, photo_likes, photos, questions, scores, users,
};

use crate::domain::repository::{
    AdminActionRepository, LiveStateRepository, PhotoRepository, QuestionRepository,
    ScoreRepository, UserRepository,
};
use crate::domain::types::{
    AdminAction, LeaderboardRow, LiveState, Photo, Question, QuestionRound, TeamLeaderboardRow,
    User,
};
use crate::error::PartyServiceError;

/// Primary key of the single live-state row.
const LIVE_STATE_ROW: i16 = 1;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, PartyServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find user by name")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), PartyServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            team: Set(user.team.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        team: model.team,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Question repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbQuestionRepository {
    pub db: DatabaseConnection,
}

impl QuestionRepository for DbQuestionRepository {
    async fn list_daily(&self, date: NaiveDate) -> Result<Vec<Question>, PartyServiceError> {
        let models = questions::Entity::find()
            .filter(questions::Column::Round.eq(QuestionRound::Daily.as_str()))
            .filter(questions::Column::ActiveDate.eq(date))
            .order_by_asc(questions::Column::Position)
            .all(&self.db)
            .await
            .context("list daily questions")?;
        models.into_iter().map(question_from_model).collect()
    }

    async fn find_live_by_position(
        &self,
        position: i32,
    ) -> Result<Option<Question>, PartyServiceError> {
        let model = questions::Entity::find()
            .filter(questions::Column::Round.eq(QuestionRound::Live.as_str()))
            .filter(questions::Column::Position.eq(position))
            .one(&self.db)
            .await
            .context("find live question by position")?;
        model.map(question_from_model).transpose()
    }

    async fn count_live(&self) -> Result<u64, PartyServiceError> {
        let count = questions::Entity::find()
            .filter(questions::Column::Round.eq(QuestionRound::Live.as_str()))
            .count(&self.db)
            .await
            .context("count live questions")?;
        Ok(count)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, PartyServiceError> {
        let model = questions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find question by id")?;
        model.map(question_from_model).transpose()
    }
}

fn question_from_model(model: questions::Model) -> Result<Question, PartyServiceError> {
    let round = QuestionRound::parse(&model.round)
        .ok_or_else(|| anyhow!("unknown question round {:?}", model.round))?;
    let options: Vec<String> =
        serde_json::from_value(model.options).context("parse question options")?;
    Ok(Question {
        id: model.id,
        round,
        position: model.position,
        text: model.text,
        options,
        answer_index: model.answer_index,
        points: model.points,
        active_date: model.active_date,
    })
}

// ── Score repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbScoreRepository {
    pub db: DatabaseConnection,
}

impl ScoreRepository for DbScoreRepository {
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, PartyServiceError> {
        use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

        #[derive(Debug, FromQueryResult)]
        struct Row {
            name: String,
            team: Option<String>,
            points: i32,
        }

        let rows = Row::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            r#"
            SELECT u.name AS name, u.team AS team, COALESCE(s.points, 0) AS points
                FROM users u
                LEFT JOIN scores s ON s.user_id = u.id
            ORDER BY points DESC, name ASC
            "#,
        ))
        .all(&self.db)
        .await
        .context("leaderboard query")?;

        Ok(rows
            .into_iter()
            .map(|row| LeaderboardRow {
                name: row.name,
                team: row.team,
                points: row.points,
            })
            .collect())
    }

    async fn team_leaderboard(&self) -> Result<Vec<TeamLeaderboardRow>, PartyServiceError> {
        use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

        #[derive(Debug, FromQueryResult)]
        struct Row {
            team: String,
            points: i64,
        }

        let rows = Row::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            r#"
            SELECT u.team AS team, COALESCE(SUM(s.points), 0) AS points
                FROM users u
                LEFT JOIN scores s ON s.user_id = u.id
                WHERE u.team IS NOT NULL
            GROUP BY u.team
            ORDER BY points DESC, team ASC
            "#,
        ))
        .all(&self.db)
        .await
        .context("team leaderboard query")?;

        Ok(rows
            .into_iter()
            .map(|row| TeamLeaderboardRow {
                team: row.team,
                points: row.points,
            })
            .collect())
    }

    async fn add_points(&self, user_id: Uuid, delta: i32) -> Result<(), PartyServiceError> {
        let existing = scores::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find score for update")?;

        match existing {
            Some(row) => {
                let points = row.points + delta;
                let mut score = row.into_active_model();
                score.points = Set(points);
                score.updated_at = Set(Utc::now());
                score.update(&self.db).await.context("update score")?;
            }
            None => {
                scores::ActiveModel {
                    user_id: Set(user_id),
                    points: Set(delta),
                    updated_at: Set(Utc::now()),
                }
                .insert(&self.db)
                .await
                .context("insert score")?;
            }
        }
        Ok(())
    }

    async fn reset(&self, user_id: Uuid) -> Result<(), PartyServiceError> {
        let score = scores::ActiveModel {
            user_id: Set(user_id),
            points: Set(0),
            updated_at: Set(Utc::now()),
        };
        scores::Entity::insert(score)
            .on_conflict(
                OnConflict::column(scores::Column::UserId)
                    .update_columns([scores::Column::Points, scores::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("reset score")?;
        Ok(())
    }
}

// ── Photo repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPhotoRepository {
    pub db: DatabaseConnection,
}

impl DbPhotoRepository {
    async fn like_count(&self, photo_id: Uuid) -> Result<u64, PartyServiceError> {
        let count = photo_likes::Entity::find()
            .filter(photo_likes::Column::PhotoId.eq(photo_id))
            .count(&self.db)
            .await
            .context("count photo likes")?;
        Ok(count)
    }
}

impl PhotoRepository for DbPhotoRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Photo>, PartyServiceError> {
        let models = photos::Entity::find()
            .order_by_desc(photos::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list photos")?;

        let mut result = Vec::with_capacity(models.len());
        for model in models {
            let like_count = self.like_count(model.id).await?;
            result.push(photo_from_model(model, like_count));
        }
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Photo>, PartyServiceError> {
        let model = photos::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find photo by id")?;
        match model {
            Some(model) => {
                let like_count = self.like_count(model.id).await?;
                Ok(Some(photo_from_model(model, like_count)))
            }
            None => Ok(None),
        }
    }

    async fn toggle_like(
        &self,
        photo_id: Uuid,
        user_name: &str,
    ) -> Result<(bool, u64), PartyServiceError> {
        let deleted = photo_likes::Entity::delete_many()
            .filter(photo_likes::Column::PhotoId.eq(photo_id))
            .filter(photo_likes::Column::UserName.eq(user_name))
            .exec(&self.db)
            .await
            .context("remove photo like")?;

        let liked = if deleted.rows_affected == 0 {
            photo_likes::ActiveModel {
                photo_id: Set(photo_id),
                user_name: Set(user_name.to_owned()),
                created_at: Set(Utc::now()),
            }
            .insert(&self.db)
            .await
            .context("insert photo like")?;
            true
        } else {
            false
        };

        let count = self.like_count(photo_id).await?;
        Ok((liked, count))
    }
}

fn photo_from_model(model: photos::Model, like_count: u64) -> Photo {
    Photo {
        id: model.id,
        uploader: model.uploader,
        caption: model.caption,
        url: model.url,
        like_count,
        created_at: model.created_at,
    }
}

// ── Live-state repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLiveStateRepository {
    pub db: DatabaseConnection,
}

impl LiveStateRepository for DbLiveStateRepository {
    async fn get(&self) -> Result<LiveState, PartyServiceError> {
        let model = live_state::Entity::find_by_id(LIVE_STATE_ROW)
            .one(&self.db)
            .await
            .context("get live state")?;
        Ok(model
            .map(|m| LiveState {
                live: m.live,
                paused: m.paused,
                ended: m.ended,
                current_question: m.current_question,
                scores_locked: m.scores_locked,
            })
            .unwrap_or_default())
    }

    async fn save(&self, state: &LiveState) -> Result<(), PartyServiceError> {
        let model = live_state::ActiveModel {
            id: Set(LIVE_STATE_ROW),
            live: Set(state.live),
            paused: Set(state.paused),
            ended: Set(state.ended),
            current_question: Set(state.current_question),
            scores_locked: Set(state.scores_locked),
            updated_at: Set(Utc::now()),
        };
        live_state::Entity::insert(model)
            .on_conflict(
                OnConflict::column(live_state::Column::Id)
                    .update_columns([
                        live_state::Column::Live,
                        live_state::Column::Paused,
                        live_state::Column::Ended,
                        live_state::Column::CurrentQuestion,
                        live_state::Column::ScoresLocked,
                        live_state::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("save live state")?;
        Ok(())
    }
}

// ── Admin action repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminActionRepository {
    pub db: DatabaseConnection,
}

impl AdminActionRepository for DbAdminActionRepository {
    async fn append(&self, action: &AdminAction) -> Result<(), PartyServiceError> {
        admin_actions::ActiveModel {
            id: Set(action.id),
            action: Set(action.action.clone()),
            details: Set(action.details.clone()),
            actor: Set(action.actor.clone()),
            created_at: Set(action.created_at),
        }
        .insert(&self.db)
        .await
        .context("append admin action")?;
        Ok(())
    }
}
