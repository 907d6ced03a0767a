use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use hawktrivia_domain::player::{normalize_player_name, validate_player_name};

use crate::domain::repository::{AdminActionRepository, ScoreRepository, UserRepository};
use crate::domain::types::User;
use crate::error::PartyServiceError;
use crate::usecase::admin_action;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub name: String,
    pub team: Option<String>,
}

pub struct RegisterUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> RegisterUserUseCase<U> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, PartyServiceError> {
        if !validate_player_name(&input.name) {
            return Err(PartyServiceError::InvalidName);
        }
        let name = normalize_player_name(&input.name);
        if self.users.find_by_name(&name).await?.is_some() {
            return Err(PartyServiceError::UserAlreadyExists);
        }

        let team = input
            .team
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            name,
            team,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        Ok(user)
    }
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> SignInUseCase<U> {
    pub async fn execute(&self, name: &str) -> Result<User, PartyServiceError> {
        self.users
            .find_by_name(name)
            .await?
            .ok_or(PartyServiceError::UserNotFound)
    }
}

// ── ResetScore ───────────────────────────────────────────────────────────────

/// Admin-only: zero out one guest's trivia points.
pub struct ResetScoreUseCase<U: UserRepository, S: ScoreRepository, A: AdminActionRepository> {
    pub users: U,
    pub scores: S,
    pub actions: A,
}

impl<U: UserRepository, S: ScoreRepository, A: AdminActionRepository>
    ResetScoreUseCase<U, S, A>
{
    pub async fn execute(&self, name: &str) -> Result<(), PartyServiceError> {
        let user = self
            .users
            .find_by_name(name)
            .await?
            .ok_or(PartyServiceError::UserNotFound)?;
        self.scores.reset(user.id).await?;
        self.actions
            .append(&admin_action("reset_score", json!({ "user": user.name })))
            .await?;
        Ok(())
    }
}
