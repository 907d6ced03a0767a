use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hawktrivia_auth_types::identity::PlayerIdentity;

use crate::domain::types::Question;
use crate::error::PartyServiceError;
use crate::state::AppState;
use crate::usecase::trivia::{
    GetDailyQuestionsUseCase, GetLiveQuestionUseCase, SubmitAnswerInput, SubmitAnswerUseCase,
};

/// A question as shown to guests: the answer index never leaves the server.
#[derive(Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub position: i32,
    pub text: String,
    pub options: Vec<String>,
    pub points: i32,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_string(),
            position: question.position,
            text: question.text,
            options: question.options,
            points: question.points,
        }
    }
}

// ── GET /trivia/daily ────────────────────────────────────────────────────────

pub async fn get_daily_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, PartyServiceError> {
    let usecase = GetDailyQuestionsUseCase {
        questions: state.question_repo()?,
    };
    let questions = usecase.execute(Utc::now().date_naive()).await?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

// ── GET /trivia/live ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct LiveQuestionResponse {
    pub live: bool,
    pub paused: bool,
    pub ended: bool,
    pub current_question: i32,
    pub total_questions: u64,
    /// `null` once the index runs past the available questions.
    pub question: Option<QuestionResponse>,
}

pub async fn get_live_question(
    State(state): State<AppState>,
) -> Result<Json<LiveQuestionResponse>, PartyServiceError> {
    let usecase = GetLiveQuestionUseCase {
        questions: state.question_repo()?,
        live: state.live_state_repo()?,
    };
    let output = usecase.execute().await?;
    Ok(Json(LiveQuestionResponse {
        live: output.state.live,
        paused: output.state.paused,
        ended: output.state.ended,
        current_question: output.state.current_question,
        total_questions: output.total,
        question: output.question.map(Into::into),
    }))
}

// ── POST /trivia/answer ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitAnswerRequest {
    pub question_id: Uuid,
    pub answer_index: i32,
}

#[derive(Serialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub points_awarded: i32,
}

pub async fn submit_answer(
    player: PlayerIdentity,
    State(state): State<AppState>,
    Json(body): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, PartyServiceError> {
    let usecase = SubmitAnswerUseCase {
        questions: state.question_repo()?,
        scores: state.score_repo()?,
        users: state.user_repo()?,
        live: state.live_state_repo()?,
    };
    let output = usecase
        .execute(
            &player.name,
            SubmitAnswerInput {
                question_id: body.question_id,
                answer_index: body.answer_index,
            },
        )
        .await?;
    Ok(Json(SubmitAnswerResponse {
        correct: output.correct,
        points_awarded: output.points_awarded,
    }))
}
