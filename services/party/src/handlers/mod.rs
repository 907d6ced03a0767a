pub mod admin;
pub mod leaderboard;
pub mod photos;
pub mod trivia;
pub mod users;

use serde::Serialize;

use crate::domain::types::LiveState;

/// Live-round flags as returned by the admin and trivia routes.
#[derive(Serialize)]
pub struct LiveStateResponse {
    pub live: bool,
    pub paused: bool,
    pub ended: bool,
    pub current_question: i32,
    pub scores_locked: bool,
}

impl From<LiveState> for LiveStateResponse {
    fn from(state: LiveState) -> Self {
        Self {
            live: state.live,
            paused: state.paused,
            ended: state.ended,
            current_question: state.current_question,
            scores_locked: state.scores_locked,
        }
    }
}
