use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use hawktrivia_party::domain::repository::{
    AdminActionRepository, LiveStateRepository, QuestionRepository, ScoreRepository,
    UserRepository,
};
use hawktrivia_party::domain::types::{
    AdminAction, LeaderboardRow, LiveState, Question, QuestionRound, TeamLeaderboardRow, User,
};
use hawktrivia_party::error::PartyServiceError;

pub const TEST_ADMIN_SECRET: &str = "top-secret";

pub fn test_user(name: &str, team: Option<&str>) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        team: team.map(str::to_owned),
        created_at: now,
        updated_at: now,
    }
}

pub fn live_question(position: i32, answer_index: i32) -> Question {
    Question {
        id: Uuid::now_v7(),
        round: QuestionRound::Live,
        position,
        text: format!("Live question {position}"),
        options: vec![
            "Option A".to_owned(),
            "Option B".to_owned(),
            "Option C".to_owned(),
        ],
        answer_index,
        points: 10,
        active_date: None,
    }
}

pub fn daily_question(position: i32, active_date: NaiveDate) -> Question {
    Question {
        id: Uuid::now_v7(),
        round: QuestionRound::Daily,
        position,
        text: format!("Daily question {position}"),
        options: vec!["Yes".to_owned(), "No".to_owned()],
        answer_index: 0,
        points: 5,
        active_date: Some(active_date),
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, PartyServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), PartyServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

// ── MockQuestionRepo ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockQuestionRepo {
    pub questions: Arc<Mutex<Vec<Question>>>,
}

impl MockQuestionRepo {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(Mutex::new(questions)),
        }
    }
}

impl QuestionRepository for MockQuestionRepo {
    async fn list_daily(&self, date: NaiveDate) -> Result<Vec<Question>, PartyServiceError> {
        let mut questions: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.round == QuestionRound::Daily && q.active_date == Some(date))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.position);
        Ok(questions)
    }

    async fn find_live_by_position(
        &self,
        position: i32,
    ) -> Result<Option<Question>, PartyServiceError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.round == QuestionRound::Live && q.position == position)
            .cloned())
    }

    async fn count_live(&self) -> Result<u64, PartyServiceError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.round == QuestionRound::Live)
            .count() as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, PartyServiceError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }
}

// ── MockScoreRepo ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockScoreRepo {
    pub points: Arc<Mutex<HashMap<Uuid, i32>>>,
    pub rows: Arc<Mutex<Vec<LeaderboardRow>>>,
    pub query_count: Arc<Mutex<u32>>,
}

impl MockScoreRepo {
    pub fn new(rows: Vec<LeaderboardRow>) -> Self {
        Self {
            points: Arc::new(Mutex::new(HashMap::new())),
            rows: Arc::new(Mutex::new(rows)),
            query_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn queries(&self) -> u32 {
        *self.query_count.lock().unwrap()
    }

    pub fn points_for(&self, user_id: Uuid) -> Option<i32> {
        self.points.lock().unwrap().get(&user_id).copied()
    }

    pub fn add_points_sync(&self, user_id: Uuid, delta: i32) {
        *self.points.lock().unwrap().entry(user_id).or_insert(0) += delta;
    }
}

impl ScoreRepository for MockScoreRepo {
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, PartyServiceError> {
        *self.query_count.lock().unwrap() += 1;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn team_leaderboard(&self) -> Result<Vec<TeamLeaderboardRow>, PartyServiceError> {
        let mut totals: HashMap<String, i64> = HashMap::new();
        for row in self.rows.lock().unwrap().iter() {
            if let Some(team) = &row.team {
                *totals.entry(team.clone()).or_default() += row.points as i64;
            }
        }
        let mut teams: Vec<TeamLeaderboardRow> = totals
            .into_iter()
            .map(|(team, points)| TeamLeaderboardRow { team, points })
            .collect();
        teams.sort_by(|a, b| b.points.cmp(&a.points).then(a.team.cmp(&b.team)));
        Ok(teams)
    }

    async fn add_points(&self, user_id: Uuid, delta: i32) -> Result<(), PartyServiceError> {
        *self.points.lock().unwrap().entry(user_id).or_insert(0) += delta;
        Ok(())
    }

    async fn reset(&self, user_id: Uuid) -> Result<(), PartyServiceError> {
        self.points.lock().unwrap().insert(user_id, 0);
        Ok(())
    }
}

// ── MockLiveStateRepo ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockLiveStateRepo {
    pub state: Arc<Mutex<LiveState>>,
}

impl MockLiveStateRepo {
    pub fn new(state: LiveState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn idle() -> Self {
        Self::new(LiveState::default())
    }

    pub fn running() -> Self {
        Self::new(LiveState {
            live: true,
            ..LiveState::default()
        })
    }

    pub fn snapshot(&self) -> LiveState {
        *self.state.lock().unwrap()
    }
}

impl LiveStateRepository for MockLiveStateRepo {
    async fn get(&self) -> Result<LiveState, PartyServiceError> {
        Ok(*self.state.lock().unwrap())
    }

    async fn save(&self, state: &LiveState) -> Result<(), PartyServiceError> {
        *self.state.lock().unwrap() = *state;
        Ok(())
    }
}

// ── MockAdminActionRepo ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAdminActionRepo {
    pub actions: Arc<Mutex<Vec<AdminAction>>>,
}

impl MockAdminActionRepo {
    pub fn empty() -> Self {
        Self {
            actions: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn action_names(&self) -> Vec<String> {
        self.actions
            .lock()
            .unwrap()
            .iter()
            .map(|a| a.action.clone())
            .collect()
    }
}

impl AdminActionRepository for MockAdminActionRepo {
    async fn append(&self, action: &AdminAction) -> Result<(), PartyServiceError> {
        self.actions.lock().unwrap().push(action.clone());
        Ok(())
    }
}
