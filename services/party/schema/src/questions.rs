use sea_orm::entity::prelude::*;

/// Trivia question. `round` is "daily" or "live"; `options` is a JSON array
/// of answer strings; `active_date` applies to daily questions only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub round: String,
    pub position: i32,
    pub text: String,
    pub options: Json,
    pub answer_index: i32,
    pub points: i32,
    pub active_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
