use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lifecycle of a squares board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Open,
    Locked,
    InProgress,
    Completed,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Locked => "locked",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "locked" => Some(Self::Locked),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// One of the four quarters, validated to 1–4 at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quarter(u8);

impl Quarter {
    pub fn new(n: u8) -> Option<Self> {
        (1..=4).contains(&n).then_some(Self(n))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn is_final(self) -> bool {
        self.0 == 4
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

/// Recorded (score_a, score_b) pairs per quarter, unset until entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuarterScores([Option<(i32, i32)>; 4]);

impl QuarterScores {
    pub fn from_pairs(pairs: [Option<(i32, i32)>; 4]) -> Self {
        Self(pairs)
    }

    pub fn get(&self, quarter: Quarter) -> Option<(i32, i32)> {
        self.0[quarter.index()]
    }

    pub fn set(&mut self, quarter: Quarter, score_a: i32, score_b: i32) {
        self.0[quarter.index()] = Some((score_a, score_b));
    }

    pub fn clear(&mut self, quarter: Quarter) {
        self.0[quarter.index()] = None;
    }

    pub fn any_recorded(&self) -> bool {
        self.0.iter().any(Option::is_some)
    }

    pub fn pairs(&self) -> [Option<(i32, i32)>; 4] {
        self.0
    }
}

/// A squares betting-pool board.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    pub created_by: String,
    pub status: GameStatus,
    pub grid_size: i32,
    pub entry_fee_cents: Option<i32>,
    pub max_squares_per_player: Option<i32>,
    pub share_code: String,
    pub row_numbers: Option<Vec<u8>>,
    pub col_numbers: Option<Vec<u8>>,
    pub scores: QuarterScores,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn is_creator(&self, player_name: &str) -> bool {
        self.created_by == player_name
    }
}

/// A claimed cell.
#[derive(Debug, Clone)]
pub struct Entry {
    pub game_id: Uuid,
    pub row: i32,
    pub col: i32,
    pub player_name: String,
    pub claimed_at: DateTime<Utc>,
}

/// Resolved winner for one quarter.
#[derive(Debug, Clone)]
pub struct Winner {
    pub game_id: Uuid,
    pub quarter: u8,
    pub row: i32,
    pub col: i32,
    pub row_digit: u8,
    pub col_digit: u8,
    pub player_name: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only audit record of a board mutation.
#[derive(Debug, Clone)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub game_id: Uuid,
    pub action: String,
    pub details: serde_json::Value,
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

/// Bulk-fill strategy for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    House,
    RoundRobin,
}

impl FillMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "house" => Some(Self::House),
            "round_robin" => Some(Self::RoundRobin),
            _ => None,
        }
    }
}

/// Name assigned by house fills when the caller does not supply one.
pub const DEFAULT_HOUSE_NAME: &str = "House";

/// Smallest and largest accepted board sizes.
pub const MIN_GRID_SIZE: i32 = 2;
pub const MAX_GRID_SIZE: i32 = 10;

/// Default board size.
pub const DEFAULT_GRID_SIZE: i32 = 10;
