use chrono::NaiveDate;

use hawktrivia_party::domain::types::LiveState;
use hawktrivia_party::error::PartyServiceError;
use hawktrivia_party::usecase::trivia::{
    GetDailyQuestionsUseCase, GetLiveQuestionUseCase, SubmitAnswerInput, SubmitAnswerUseCase,
};

use crate::helpers::{
    MockLiveStateRepo, MockQuestionRepo, MockScoreRepo, MockUserRepo, daily_question,
    live_question, test_user,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn should_list_daily_questions_for_date_in_position_order() {
    let today = date(2026, 2, 1);
    let questions = MockQuestionRepo::new(vec![
        daily_question(2, today),
        daily_question(1, today),
        daily_question(1, date(2026, 2, 2)),
        live_question(0, 0),
    ]);
    let usecase = GetDailyQuestionsUseCase { questions };

    let result = usecase.execute(today).await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].position, 1);
    assert_eq!(result[1].position, 2);
}

#[tokio::test]
async fn should_return_current_live_question() {
    let questions = MockQuestionRepo::new(vec![live_question(0, 2), live_question(1, 0)]);
    let usecase = GetLiveQuestionUseCase {
        questions,
        live: MockLiveStateRepo::running(),
    };

    let output = usecase.execute().await.unwrap();

    assert_eq!(output.total, 2);
    let question = output.question.unwrap();
    assert_eq!(question.position, 0);
}

#[tokio::test]
async fn should_hide_question_when_round_not_live() {
    let questions = MockQuestionRepo::new(vec![live_question(0, 2)]);
    let usecase = GetLiveQuestionUseCase {
        questions,
        live: MockLiveStateRepo::idle(),
    };

    let output = usecase.execute().await.unwrap();
    assert!(output.question.is_none());
}

#[tokio::test]
async fn should_award_points_for_correct_answer() {
    let user = test_user("alice", None);
    let user_id = user.id;
    let question = live_question(0, 2);
    let question_id = question.id;
    let scores = MockScoreRepo::empty();
    let usecase = SubmitAnswerUseCase {
        questions: MockQuestionRepo::new(vec![question]),
        scores: scores.clone(),
        users: MockUserRepo::new(vec![user]),
        live: MockLiveStateRepo::running(),
    };

    let output = usecase
        .execute(
            "alice",
            SubmitAnswerInput {
                question_id,
                answer_index: 2,
            },
        )
        .await
        .unwrap();

    assert!(output.correct);
    assert_eq!(output.points_awarded, 10);
    assert_eq!(scores.points_for(user_id), Some(10));
}

#[tokio::test]
async fn should_not_award_points_for_wrong_answer() {
    let user = test_user("alice", None);
    let user_id = user.id;
    let question = live_question(0, 2);
    let question_id = question.id;
    let scores = MockScoreRepo::empty();
    let usecase = SubmitAnswerUseCase {
        questions: MockQuestionRepo::new(vec![question]),
        scores: scores.clone(),
        users: MockUserRepo::new(vec![user]),
        live: MockLiveStateRepo::running(),
    };

    let output = usecase
        .execute(
            "alice",
            SubmitAnswerInput {
                question_id,
                answer_index: 0,
            },
        )
        .await
        .unwrap();

    assert!(!output.correct);
    assert_eq!(output.points_awarded, 0);
    assert_eq!(scores.points_for(user_id), None);
}

#[tokio::test]
async fn should_reject_answer_when_scores_locked() {
    let user = test_user("alice", None);
    let question = live_question(0, 2);
    let question_id = question.id;
    let usecase = SubmitAnswerUseCase {
        questions: MockQuestionRepo::new(vec![question]),
        scores: MockScoreRepo::empty(),
        users: MockUserRepo::new(vec![user]),
        live: MockLiveStateRepo::new(LiveState {
            live: false,
            ended: true,
            scores_locked: true,
            ..LiveState::default()
        }),
    };

    let result = usecase
        .execute(
            "alice",
            SubmitAnswerInput {
                question_id,
                answer_index: 2,
            },
        )
        .await;
    assert!(matches!(result, Err(PartyServiceError::ScoresLocked)));
}

#[tokio::test]
async fn should_reject_answer_from_unknown_user() {
    let question = live_question(0, 2);
    let question_id = question.id;
    let usecase = SubmitAnswerUseCase {
        questions: MockQuestionRepo::new(vec![question]),
        scores: MockScoreRepo::empty(),
        users: MockUserRepo::empty(),
        live: MockLiveStateRepo::running(),
    };

    let result = usecase
        .execute(
            "ghost",
            SubmitAnswerInput {
                question_id,
                answer_index: 0,
            },
        )
        .await;
    assert!(matches!(result, Err(PartyServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_out_of_range_answer_index() {
    let user = test_user("alice", None);
    let question = live_question(0, 2); // three options
    let question_id = question.id;
    let usecase = SubmitAnswerUseCase {
        questions: MockQuestionRepo::new(vec![question]),
        scores: MockScoreRepo::empty(),
        users: MockUserRepo::new(vec![user]),
        live: MockLiveStateRepo::running(),
    };

    for answer_index in [-1, 3] {
        let result = usecase
            .execute(
                "alice",
                SubmitAnswerInput {
                    question_id,
                    answer_index,
                },
            )
            .await;
        assert!(matches!(result, Err(PartyServiceError::InvalidAnswer)));
    }
}
