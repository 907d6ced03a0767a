use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Winners::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Winners::GameId).uuid().not_null())
                    .col(ColumnDef::new(Winners::Quarter).small_integer().not_null())
                    .col(ColumnDef::new(Winners::Row).integer().not_null())
                    .col(ColumnDef::new(Winners::Col).integer().not_null())
                    .col(ColumnDef::new(Winners::RowDigit).small_integer().not_null())
                    .col(ColumnDef::new(Winners::ColDigit).small_integer().not_null())
                    .col(ColumnDef::new(Winners::PlayerName).string().not_null())
                    .col(
                        ColumnDef::new(Winners::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(Index::create().col(Winners::GameId).col(Winners::Quarter))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Winners::Table, Winners::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Winners::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Winners {
    Table,
    GameId,
    Quarter,
    Row,
    Col,
    RowDigit,
    ColDigit,
    PlayerName,
    CreatedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
}
