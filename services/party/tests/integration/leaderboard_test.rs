use std::sync::Arc;
use std::time::Duration;

use hawktrivia_core::cache::TimedSlot;
use hawktrivia_party::domain::types::LeaderboardRow;
use hawktrivia_party::usecase::leaderboard::{
    GetLeaderboardUseCase, GetTeamLeaderboardUseCase,
};

use crate::helpers::MockScoreRepo;

fn row(name: &str, team: Option<&str>, points: i32) -> LeaderboardRow {
    LeaderboardRow {
        name: name.to_owned(),
        team: team.map(str::to_owned),
        points,
    }
}

#[tokio::test]
async fn should_compute_leaderboard_on_cache_miss() {
    let scores = MockScoreRepo::new(vec![row("alice", None, 30), row("bob", None, 10)]);
    let usecase = GetLeaderboardUseCase {
        scores: scores.clone(),
        cache: Arc::new(TimedSlot::new(Duration::from_secs(30))),
    };

    let rows = usecase.execute().await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "alice");
    assert_eq!(scores.queries(), 1);
}

#[tokio::test]
async fn should_serve_from_cache_within_ttl() {
    let scores = MockScoreRepo::new(vec![row("alice", None, 30)]);
    let usecase = GetLeaderboardUseCase {
        scores: scores.clone(),
        cache: Arc::new(TimedSlot::new(Duration::from_secs(30))),
    };

    usecase.execute().await.unwrap();
    usecase.execute().await.unwrap();
    usecase.execute().await.unwrap();

    assert_eq!(scores.queries(), 1);
}

#[tokio::test]
async fn should_recompute_after_ttl_expires() {
    let scores = MockScoreRepo::new(vec![row("alice", None, 30)]);
    let usecase = GetLeaderboardUseCase {
        scores: scores.clone(),
        cache: Arc::new(TimedSlot::new(Duration::from_millis(10))),
    };

    usecase.execute().await.unwrap();
    tokio::time::sleep(Duration::from_millis(25)).await;
    usecase.execute().await.unwrap();

    assert_eq!(scores.queries(), 2);
}

#[tokio::test]
async fn should_aggregate_points_by_team() {
    let scores = MockScoreRepo::new(vec![
        row("alice", Some("Hawks"), 30),
        row("bob", Some("Owls"), 10),
        row("carol", Some("Hawks"), 15),
        row("dave", None, 99),
    ]);
    let usecase = GetTeamLeaderboardUseCase { scores };

    let teams = usecase.execute().await.unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team, "Hawks");
    assert_eq!(teams[0].points, 45);
    assert_eq!(teams[1].team, "Owls");
    assert_eq!(teams[1].points, 10);
}
