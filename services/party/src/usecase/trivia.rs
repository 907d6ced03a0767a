use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::repository::{
    LiveStateRepository, QuestionRepository, ScoreRepository, UserRepository,
};
use crate::domain::types::{LiveState, Question};
use crate::error::PartyServiceError;

// ── GetDailyQuestions ────────────────────────────────────────────────────────

pub struct GetDailyQuestionsUseCase<Q: QuestionRepository> {
    pub questions: Q,
}

impl<Q: QuestionRepository> GetDailyQuestionsUseCase<Q> {
    pub async fn execute(&self, date: NaiveDate) -> Result<Vec<Question>, PartyServiceError> {
        self.questions.list_daily(date).await
    }
}

// ── GetLiveQuestion ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LiveQuestionOutput {
    pub state: LiveState,
    /// `None` when the round is not running or the index has run past the
    /// available questions ("no more questions").
    pub question: Option<Question>,
    pub total: u64,
}

pub struct GetLiveQuestionUseCase<Q: QuestionRepository, R: LiveStateRepository> {
    pub questions: Q,
    pub live: R,
}

impl<Q: QuestionRepository, R: LiveStateRepository> GetLiveQuestionUseCase<Q, R> {
    pub async fn execute(&self) -> Result<LiveQuestionOutput, PartyServiceError> {
        let state = self.live.get().await?;
        let total = self.questions.count_live().await?;
        let question = if state.live && !state.ended {
            self.questions
                .find_live_by_position(state.current_question)
                .await?
        } else {
            None
        };
        Ok(LiveQuestionOutput {
            state,
            question,
            total,
        })
    }
}

// ── SubmitAnswer ─────────────────────────────────────────────────────────────

pub struct SubmitAnswerInput {
    pub question_id: Uuid,
    pub answer_index: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct SubmitAnswerOutput {
    pub correct: bool,
    pub points_awarded: i32,
}

pub struct SubmitAnswerUseCase<
    Q: QuestionRepository,
    S: ScoreRepository,
    U: UserRepository,
    R: LiveStateRepository,
> {
    pub questions: Q,
    pub scores: S,
    pub users: U,
    pub live: R,
}

impl<Q: QuestionRepository, S: ScoreRepository, U: UserRepository, R: LiveStateRepository>
    SubmitAnswerUseCase<Q, S, U, R>
{
    pub async fn execute(
        &self,
        player: &str,
        input: SubmitAnswerInput,
    ) -> Result<SubmitAnswerOutput, PartyServiceError> {
        let user = self
            .users
            .find_by_name(player)
            .await?
            .ok_or(PartyServiceError::UserNotFound)?;
        let question = self
            .questions
            .find_by_id(input.question_id)
            .await?
            .ok_or(PartyServiceError::QuestionNotFound)?;

        if input.answer_index < 0 || input.answer_index as usize >= question.options.len() {
            return Err(PartyServiceError::InvalidAnswer);
        }

        let state = self.live.get().await?;
        if state.scores_locked {
            return Err(PartyServiceError::ScoresLocked);
        }

        let correct = input.answer_index == question.answer_index;
        let points_awarded = if correct { question.points } else { 0 };
        if correct {
            self.scores.add_points(user.id, question.points).await?;
        }
        Ok(SubmitAnswerOutput {
            correct,
            points_awarded,
        })
    }
}
