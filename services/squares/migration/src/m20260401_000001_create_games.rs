use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::TeamA).string().not_null())
                    .col(ColumnDef::new(Games::TeamB).string().not_null())
                    .col(ColumnDef::new(Games::CreatedBy).string().not_null())
                    .col(
                        ColumnDef::new(Games::Status)
                            .string()
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(Games::GridSize)
                            .integer()
                            .not_null()
                            .default(10),
                    )
                    .col(ColumnDef::new(Games::EntryFeeCents).integer())
                    .col(ColumnDef::new(Games::MaxSquaresPerPlayer).integer())
                    .col(
                        ColumnDef::new(Games::ShareCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Games::RowNumbers).json_binary())
                    .col(ColumnDef::new(Games::ColNumbers).json_binary())
                    .col(ColumnDef::new(Games::Q1ScoreA).integer())
                    .col(ColumnDef::new(Games::Q1ScoreB).integer())
                    .col(ColumnDef::new(Games::Q2ScoreA).integer())
                    .col(ColumnDef::new(Games::Q2ScoreB).integer())
                    .col(ColumnDef::new(Games::Q3ScoreA).integer())
                    .col(ColumnDef::new(Games::Q3ScoreB).integer())
                    .col(ColumnDef::new(Games::Q4ScoreA).integer())
                    .col(ColumnDef::new(Games::Q4ScoreB).integer())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    Name,
    TeamA,
    TeamB,
    CreatedBy,
    Status,
    GridSize,
    EntryFeeCents,
    MaxSquaresPerPlayer,
    ShareCode,
    RowNumbers,
    ColNumbers,
    Q1ScoreA,
    Q1ScoreB,
    Q2ScoreA,
    Q2ScoreB,
    Q3ScoreA,
    Q3ScoreB,
    Q4ScoreA,
    Q4ScoreB,
    CreatedAt,
    UpdatedAt,
}
