use hawktrivia_domain::share_code::validate_share_code;
use hawktrivia_squares::domain::grid::is_digit_permutation;
use hawktrivia_squares::domain::types::GameStatus;
use hawktrivia_squares::error::SquaresServiceError;
use hawktrivia_squares::usecase::game::{
    CreateGameInput, CreateGameUseCase, GetGameUseCase, LockGameUseCase, ReshuffleUseCase,
};
use hawktrivia_squares::usecase::score::{RecordScoreInput, RecordScoreUseCase};

use crate::helpers::{
    MockAuditRepo, MockEntryRepo, MockGameRepo, MockWinnerRepo, locked_game, test_game,
};

fn create_input() -> CreateGameInput {
    CreateGameInput {
        name: "Big Game Board".to_owned(),
        team_a: "Hawks".to_owned(),
        team_b: "Owls".to_owned(),
        grid_size: None,
        entry_fee_cents: None,
        max_squares_per_player: None,
    }
}

// ── CreateGameUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_open_game_with_share_code() {
    let games = MockGameRepo::empty();
    let audit = MockAuditRepo::empty();
    let usecase = CreateGameUseCase {
        games: games.clone(),
        audit: audit.clone(),
    };

    let game = usecase.execute("alice", create_input()).await.unwrap();

    assert_eq!(game.status, GameStatus::Open);
    assert_eq!(game.created_by, "alice");
    assert_eq!(game.grid_size, 10);
    assert!(game.row_numbers.is_none());
    assert!(validate_share_code(&game.share_code));
    assert!(games.get(game.id).is_some());
    assert_eq!(audit.actions(), vec!["create_game"]);
}

#[tokio::test]
async fn should_reject_blank_team_name() {
    let usecase = CreateGameUseCase {
        games: MockGameRepo::empty(),
        audit: MockAuditRepo::empty(),
    };
    let mut input = create_input();
    input.team_b = "   ".to_owned();

    let result = usecase.execute("alice", input).await;
    assert!(matches!(result, Err(SquaresServiceError::InvalidGameData)));
}

#[tokio::test]
async fn should_reject_out_of_range_grid_size() {
    let usecase = CreateGameUseCase {
        games: MockGameRepo::empty(),
        audit: MockAuditRepo::empty(),
    };
    for grid_size in [1, 0, -3, 11] {
        let mut input = create_input();
        input.grid_size = Some(grid_size);
        let result = usecase.execute("alice", input).await;
        assert!(matches!(result, Err(SquaresServiceError::InvalidGameData)));
    }
}

// ── LockGameUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_lock_open_game_with_digit_permutations() {
    let game = test_game("alice", GameStatus::Open);
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);
    let usecase = LockGameUseCase {
        games: games.clone(),
        audit: MockAuditRepo::empty(),
    };

    let locked = usecase.execute(id, "alice").await.unwrap();

    assert_eq!(locked.status, GameStatus::Locked);
    assert!(is_digit_permutation(locked.row_numbers.as_deref().unwrap()));
    assert!(is_digit_permutation(locked.col_numbers.as_deref().unwrap()));

    let stored = games.get(id).unwrap();
    assert_eq!(stored.status, GameStatus::Locked);
    assert!(is_digit_permutation(stored.row_numbers.as_deref().unwrap()));
}

#[tokio::test]
async fn should_reject_lock_by_non_creator() {
    let game = test_game("alice", GameStatus::Open);
    let id = game.id;
    let usecase = LockGameUseCase {
        games: MockGameRepo::new(vec![game]),
        audit: MockAuditRepo::empty(),
    };

    let result = usecase.execute(id, "mallory").await;
    assert!(matches!(result, Err(SquaresServiceError::NotCreator)));
}

#[tokio::test]
async fn should_reject_locking_a_locked_game() {
    let game = locked_game("alice");
    let id = game.id;
    let usecase = LockGameUseCase {
        games: MockGameRepo::new(vec![game]),
        audit: MockAuditRepo::empty(),
    };

    let result = usecase.execute(id, "alice").await;
    assert!(matches!(result, Err(SquaresServiceError::GameNotOpen)));
}

// ── ReshuffleUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reshuffle_locked_game_before_scores() {
    let game = locked_game("alice");
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);
    let usecase = ReshuffleUseCase {
        games: games.clone(),
        audit: MockAuditRepo::empty(),
    };

    // 1/10! odds of an identical shuffle; five tries all matching would mean
    // the permutations never actually changed.
    let originals = (
        crate::helpers::TEST_ROW_NUMBERS.to_vec(),
        crate::helpers::TEST_COL_NUMBERS.to_vec(),
    );
    let mut changed = false;
    for _ in 0..5 {
        let game = usecase.execute(id, "alice").await.unwrap();
        let rows = game.row_numbers.unwrap();
        let cols = game.col_numbers.unwrap();
        assert!(is_digit_permutation(&rows));
        assert!(is_digit_permutation(&cols));
        assert_eq!(game.status, GameStatus::Locked);
        if rows != originals.0 || cols != originals.1 {
            changed = true;
            break;
        }
    }
    assert!(changed);
}

#[tokio::test]
async fn should_reject_reshuffle_after_score_recorded() {
    let game = locked_game("alice");
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);

    let record = RecordScoreUseCase {
        games: games.clone(),
        entries: MockEntryRepo::empty(),
        winners: MockWinnerRepo::empty(),
        audit: MockAuditRepo::empty(),
    };
    record
        .execute(
            id,
            "alice",
            RecordScoreInput {
                quarter: 1,
                score_a: 7,
                score_b: 3,
            },
        )
        .await
        .unwrap();

    // Undoing a later quarter leaves the board locked again only for q1; here
    // the game is in_progress, so status alone would reject. Force the
    // score-based guard by reverting status without clearing the score.
    {
        let mut stored = games.games.lock().unwrap();
        stored.iter_mut().for_each(|g| g.status = GameStatus::Locked);
    }

    let usecase = ReshuffleUseCase {
        games,
        audit: MockAuditRepo::empty(),
    };
    let result = usecase.execute(id, "alice").await;
    assert!(matches!(
        result,
        Err(SquaresServiceError::ScoresAlreadyRecorded)
    ));
}

#[tokio::test]
async fn should_reject_reshuffle_of_open_game() {
    let game = test_game("alice", GameStatus::Open);
    let id = game.id;
    let usecase = ReshuffleUseCase {
        games: MockGameRepo::new(vec![game]),
        audit: MockAuditRepo::empty(),
    };

    let result = usecase.execute(id, "alice").await;
    assert!(matches!(result, Err(SquaresServiceError::BoardNotLocked)));
}

// ── GetGameUseCase ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_game_detail_by_share_code() {
    let game = test_game("alice", GameStatus::Open);
    let code = game.share_code.clone();
    let id = game.id;
    let entries = MockEntryRepo::new(vec![crate::helpers::test_entry(id, 0, 0, "bob")]);
    let usecase = GetGameUseCase {
        games: MockGameRepo::new(vec![game]),
        entries,
        winners: MockWinnerRepo::empty(),
    };

    let detail = usecase.execute_by_code(&code).await.unwrap();
    assert_eq!(detail.game.id, id);
    assert_eq!(detail.entries.len(), 1);
    assert!(detail.winners.is_empty());
}

#[tokio::test]
async fn should_return_not_found_for_unknown_share_code() {
    let usecase = GetGameUseCase {
        games: MockGameRepo::empty(),
        entries: MockEntryRepo::empty(),
        winners: MockWinnerRepo::empty(),
    };

    let result = usecase.execute_by_code("ZZZZZZ").await;
    assert!(matches!(result, Err(SquaresServiceError::GameNotFound)));
}
