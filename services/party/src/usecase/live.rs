use serde_json::json;

use crate::domain::repository::{AdminActionRepository, LiveStateRepository};
use crate::domain::types::LiveState;
use crate::error::PartyServiceError;
use crate::usecase::admin_action;

// ── StartRound ───────────────────────────────────────────────────────────────

pub struct StartRoundUseCase<R: LiveStateRepository, A: AdminActionRepository> {
    pub live: R,
    pub actions: A,
}

impl<R: LiveStateRepository, A: AdminActionRepository> StartRoundUseCase<R, A> {
    pub async fn execute(&self) -> Result<LiveState, PartyServiceError> {
        let mut state = self.live.get().await?;
        state.live = true;
        state.paused = false;
        state.ended = false;
        state.current_question = 0;
        self.live.save(&state).await?;
        self.actions
            .append(&admin_action("start_round", json!({})))
            .await?;
        Ok(state)
    }
}

// ── Pause / Resume ───────────────────────────────────────────────────────────

pub struct SetPausedUseCase<R: LiveStateRepository, A: AdminActionRepository> {
    pub live: R,
    pub actions: A,
}

impl<R: LiveStateRepository, A: AdminActionRepository> SetPausedUseCase<R, A> {
    pub async fn execute(&self, paused: bool) -> Result<LiveState, PartyServiceError> {
        let mut state = self.live.get().await?;
        if !state.live || state.ended {
            return Err(PartyServiceError::RoundNotLive);
        }
        state.paused = paused;
        self.live.save(&state).await?;
        let action = if paused { "pause_round" } else { "resume_round" };
        self.actions.append(&admin_action(action, json!({}))).await?;
        Ok(state)
    }
}

// ── AdvanceQuestion ──────────────────────────────────────────────────────────

pub struct AdvanceQuestionUseCase<R: LiveStateRepository, A: AdminActionRepository> {
    pub live: R,
    pub actions: A,
}

impl<R: LiveStateRepository, A: AdminActionRepository> AdvanceQuestionUseCase<R, A> {
    pub async fn execute(&self) -> Result<LiveState, PartyServiceError> {
        let mut state = self.live.get().await?;
        if !state.live || state.ended {
            return Err(PartyServiceError::RoundNotLive);
        }
        // Monotonic, with no upper-bound check against the question count;
        // the read path reports an overrun index as "no more questions".
        state.current_question += 1;
        self.live.save(&state).await?;
        self.actions
            .append(&admin_action(
                "advance_question",
                json!({ "index": state.current_question }),
            ))
            .await?;
        Ok(state)
    }
}

// ── EndRound ─────────────────────────────────────────────────────────────────

pub struct EndRoundUseCase<R: LiveStateRepository, A: AdminActionRepository> {
    pub live: R,
    pub actions: A,
}

impl<R: LiveStateRepository, A: AdminActionRepository> EndRoundUseCase<R, A> {
    pub async fn execute(&self, lock_scores: bool) -> Result<LiveState, PartyServiceError> {
        let mut state = self.live.get().await?;
        state.live = false;
        state.ended = true;
        if lock_scores {
            state.scores_locked = true;
        }
        self.live.save(&state).await?;
        self.actions
            .append(&admin_action(
                "end_round",
                json!({ "scores_locked": state.scores_locked }),
            ))
            .await?;
        Ok(state)
    }
}
