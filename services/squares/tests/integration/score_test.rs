use hawktrivia_squares::domain::types::GameStatus;
use hawktrivia_squares::error::SquaresServiceError;
use hawktrivia_squares::usecase::score::{
    RecordScoreInput, RecordScoreUseCase, UndoScoreUseCase,
};

use crate::helpers::{
    MockAuditRepo, MockEntryRepo, MockGameRepo, MockWinnerRepo, locked_game, test_entry,
    test_game,
};

fn record_usecase(
    games: MockGameRepo,
    entries: MockEntryRepo,
    winners: MockWinnerRepo,
) -> RecordScoreUseCase<MockGameRepo, MockEntryRepo, MockWinnerRepo, MockAuditRepo> {
    RecordScoreUseCase {
        games,
        entries,
        winners,
        audit: MockAuditRepo::empty(),
    }
}

fn score(quarter: u8, score_a: i32, score_b: i32) -> RecordScoreInput {
    RecordScoreInput {
        quarter,
        score_a,
        score_b,
    }
}

// ── RecordScoreUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_winner_from_score_digits() {
    // Worked example: row_numbers start [3,7,...], col_numbers start [5,1,...].
    // 13/21 → digits 3/1 → winning cell (0, 1), held by bob.
    let game = locked_game("alice");
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);
    let entries = MockEntryRepo::new(vec![test_entry(id, 0, 1, "bob")]);
    let winners = MockWinnerRepo::empty();
    let usecase = record_usecase(games.clone(), entries, winners.clone());

    let output = usecase.execute(id, "alice", score(1, 13, 21)).await.unwrap();

    assert_eq!(output.row_digit, 3);
    assert_eq!(output.col_digit, 1);
    assert_eq!((output.winning_row, output.winning_col), (0, 1));
    assert_eq!(output.status, GameStatus::InProgress);
    assert_eq!(output.winner.as_ref().unwrap().player_name, "bob");

    let stored = winners.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].quarter, 1);
    assert_eq!(stored[0].player_name, "bob");

    let game = games.get(id).unwrap();
    assert_eq!(game.status, GameStatus::InProgress);
    assert!(game.scores.any_recorded());
}

#[tokio::test]
async fn should_complete_game_on_fourth_quarter() {
    let game = locked_game("alice");
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);
    let usecase = record_usecase(games.clone(), MockEntryRepo::empty(), MockWinnerRepo::empty());

    let output = usecase.execute(id, "alice", score(4, 28, 24)).await.unwrap();

    assert_eq!(output.status, GameStatus::Completed);
    assert_eq!(games.get(id).unwrap().status, GameStatus::Completed);
}

#[tokio::test]
async fn should_record_no_winner_for_unclaimed_cell() {
    let game = locked_game("alice");
    let id = game.id;
    let winners = MockWinnerRepo::empty();
    let usecase = record_usecase(
        MockGameRepo::new(vec![game]),
        MockEntryRepo::empty(),
        winners.clone(),
    );

    let output = usecase.execute(id, "alice", score(1, 13, 21)).await.unwrap();

    // Unclaimed winning square: a valid outcome, not an error.
    assert!(output.winner.is_none());
    assert!(winners.all().is_empty());
}

#[tokio::test]
async fn should_replace_winner_when_quarter_re_recorded() {
    let game = locked_game("alice");
    let id = game.id;
    let entries = MockEntryRepo::new(vec![
        test_entry(id, 0, 1, "bob"),   // digits 3/1
        test_entry(id, 1, 2, "carol"), // digits 7/9
    ]);
    let winners = MockWinnerRepo::empty();
    let usecase = record_usecase(MockGameRepo::new(vec![game]), entries, winners.clone());

    usecase.execute(id, "alice", score(1, 13, 21)).await.unwrap();
    usecase.execute(id, "alice", score(1, 17, 19)).await.unwrap();

    let stored = winners.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].player_name, "carol");
}

#[tokio::test]
async fn should_reject_score_on_open_game() {
    let game = test_game("alice", GameStatus::Open);
    let id = game.id;
    let usecase = record_usecase(
        MockGameRepo::new(vec![game]),
        MockEntryRepo::empty(),
        MockWinnerRepo::empty(),
    );

    let result = usecase.execute(id, "alice", score(1, 7, 0)).await;
    assert!(matches!(result, Err(SquaresServiceError::BoardNotLocked)));
}

#[tokio::test]
async fn should_reject_score_by_non_creator() {
    let game = locked_game("alice");
    let id = game.id;
    let usecase = record_usecase(
        MockGameRepo::new(vec![game]),
        MockEntryRepo::empty(),
        MockWinnerRepo::empty(),
    );

    let result = usecase.execute(id, "mallory", score(1, 7, 0)).await;
    assert!(matches!(result, Err(SquaresServiceError::NotCreator)));
}

#[tokio::test]
async fn should_reject_invalid_quarter_and_negative_scores() {
    let game = locked_game("alice");
    let id = game.id;
    let usecase = record_usecase(
        MockGameRepo::new(vec![game]),
        MockEntryRepo::empty(),
        MockWinnerRepo::empty(),
    );

    let result = usecase.execute(id, "alice", score(0, 7, 0)).await;
    assert!(matches!(result, Err(SquaresServiceError::InvalidQuarter)));

    let result = usecase.execute(id, "alice", score(5, 7, 0)).await;
    assert!(matches!(result, Err(SquaresServiceError::InvalidQuarter)));

    let result = usecase.execute(id, "alice", score(1, -7, 0)).await;
    assert!(matches!(result, Err(SquaresServiceError::InvalidScore)));
}

// ── UndoScoreUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_undo_first_quarter_back_to_locked() {
    let game = locked_game("alice");
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);
    let entries = MockEntryRepo::new(vec![test_entry(id, 0, 1, "bob")]);
    let winners = MockWinnerRepo::empty();

    let record = record_usecase(games.clone(), entries, winners.clone());
    record.execute(id, "alice", score(1, 13, 21)).await.unwrap();
    assert_eq!(winners.all().len(), 1);

    let undo = UndoScoreUseCase {
        games: games.clone(),
        winners: winners.clone(),
        audit: MockAuditRepo::empty(),
    };
    undo.execute(id, "alice", 1).await.unwrap();

    let game = games.get(id).unwrap();
    assert_eq!(game.status, GameStatus::Locked);
    assert!(!game.scores.any_recorded());
    assert!(winners.all().is_empty());
}

#[tokio::test]
async fn should_undo_later_quarter_back_to_in_progress() {
    let game = locked_game("alice");
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);
    let winners = MockWinnerRepo::empty();

    let record = record_usecase(games.clone(), MockEntryRepo::empty(), winners.clone());
    record.execute(id, "alice", score(4, 28, 24)).await.unwrap();
    assert_eq!(games.get(id).unwrap().status, GameStatus::Completed);

    let undo = UndoScoreUseCase {
        games: games.clone(),
        winners,
        audit: MockAuditRepo::empty(),
    };
    undo.execute(id, "alice", 4).await.unwrap();

    assert_eq!(games.get(id).unwrap().status, GameStatus::InProgress);
}

#[tokio::test]
async fn should_recompute_independently_after_undo() {
    let game = locked_game("alice");
    let id = game.id;
    let games = MockGameRepo::new(vec![game]);
    let entries = MockEntryRepo::new(vec![
        test_entry(id, 0, 1, "bob"),   // digits 3/1
        test_entry(id, 1, 2, "carol"), // digits 7/9
    ]);
    let winners = MockWinnerRepo::empty();

    let record = record_usecase(games.clone(), entries, winners.clone());
    record.execute(id, "alice", score(1, 13, 21)).await.unwrap();

    let undo = UndoScoreUseCase {
        games: games.clone(),
        winners: winners.clone(),
        audit: MockAuditRepo::empty(),
    };
    undo.execute(id, "alice", 1).await.unwrap();

    let output = record.execute(id, "alice", score(1, 17, 19)).await.unwrap();
    assert_eq!(output.winner.as_ref().unwrap().player_name, "carol");
    let stored = winners.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].player_name, "carol");
}

#[tokio::test]
async fn should_reject_undo_by_non_creator() {
    let game = locked_game("alice");
    let id = game.id;
    let undo = UndoScoreUseCase {
        games: MockGameRepo::new(vec![game]),
        winners: MockWinnerRepo::empty(),
        audit: MockAuditRepo::empty(),
    };

    let result = undo.execute(id, "mallory", 1).await;
    assert!(matches!(result, Err(SquaresServiceError::NotCreator)));
}
