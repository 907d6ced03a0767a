use sea_orm::entity::prelude::*;

/// A squares betting-pool board.
///
/// `row_numbers` / `col_numbers` are JSON arrays of the digits 0–9, null
/// until the board is locked.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    pub created_by: String,
    pub status: String,
    pub grid_size: i32,
    pub entry_fee_cents: Option<i32>,
    pub max_squares_per_player: Option<i32>,
    #[sea_orm(unique)]
    pub share_code: String,
    pub row_numbers: Option<Json>,
    pub col_numbers: Option<Json>,
    pub q1_score_a: Option<i32>,
    pub q1_score_b: Option<i32>,
    pub q2_score_a: Option<i32>,
    pub q2_score_b: Option<i32>,
    pub q3_score_a: Option<i32>,
    pub q3_score_b: Option<i32>,
    pub q4_score_a: Option<i32>,
    pub q4_score_b: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
    #[sea_orm(has_many = "super::winners::Entity")]
    Winners,
    #[sea_orm(has_many = "super::audit_log::Entity")]
    AuditLog,
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl Related<super::winners::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Winners.def()
    }
}

impl Related<super::audit_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuditLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
