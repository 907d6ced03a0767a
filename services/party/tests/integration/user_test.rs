use hawktrivia_party::error::PartyServiceError;
use hawktrivia_party::usecase::user::{
    RegisterUserInput, RegisterUserUseCase, ResetScoreUseCase, SignInUseCase,
};

use crate::helpers::{MockAdminActionRepo, MockScoreRepo, MockUserRepo, test_user};

#[tokio::test]
async fn should_register_user_with_trimmed_name() {
    let users = MockUserRepo::empty();
    let usecase = RegisterUserUseCase {
        users: users.clone(),
    };

    let user = usecase
        .execute(RegisterUserInput {
            name: "  alice  ".to_owned(),
            team: Some(" Hawks ".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(user.name, "alice");
    assert_eq!(user.team.as_deref(), Some("Hawks"));
    assert_eq!(users.users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_invalid_name() {
    let usecase = RegisterUserUseCase {
        users: MockUserRepo::empty(),
    };

    for name in ["", "@alice", "way-too-long-name-for-sure", "a/b"] {
        let result = usecase
            .execute(RegisterUserInput {
                name: name.to_owned(),
                team: None,
            })
            .await;
        assert!(matches!(result, Err(PartyServiceError::InvalidName)));
    }
}

#[tokio::test]
async fn should_reject_duplicate_name() {
    let usecase = RegisterUserUseCase {
        users: MockUserRepo::new(vec![test_user("alice", None)]),
    };

    let result = usecase
        .execute(RegisterUserInput {
            name: "alice".to_owned(),
            team: None,
        })
        .await;
    assert!(matches!(result, Err(PartyServiceError::UserAlreadyExists)));
}

#[tokio::test]
async fn should_sign_in_existing_user() {
    let usecase = SignInUseCase {
        users: MockUserRepo::new(vec![test_user("alice", Some("Hawks"))]),
    };

    let user = usecase.execute("alice").await.unwrap();
    assert_eq!(user.name, "alice");
}

#[tokio::test]
async fn should_reject_sign_in_of_unknown_user() {
    let usecase = SignInUseCase {
        users: MockUserRepo::empty(),
    };

    let result = usecase.execute("ghost").await;
    assert!(matches!(result, Err(PartyServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reset_score_and_record_admin_action() {
    let user = test_user("alice", None);
    let user_id = user.id;
    let scores = MockScoreRepo::empty();
    scores.add_points_sync(user_id, 40);
    let actions = MockAdminActionRepo::empty();
    let usecase = ResetScoreUseCase {
        users: MockUserRepo::new(vec![user]),
        scores: scores.clone(),
        actions: actions.clone(),
    };

    usecase.execute("alice").await.unwrap();

    assert_eq!(scores.points_for(user_id), Some(0));
    assert_eq!(actions.action_names(), vec!["reset_score"]);
}

#[tokio::test]
async fn should_reject_reset_for_unknown_user() {
    let usecase = ResetScoreUseCase {
        users: MockUserRepo::empty(),
        scores: MockScoreRepo::empty(),
        actions: MockAdminActionRepo::empty(),
    };

    let result = usecase.execute("ghost").await;
    assert!(matches!(result, Err(PartyServiceError::UserNotFound)));
}
