use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Entries::GameId).uuid().not_null())
                    .col(ColumnDef::new(Entries::Row).integer().not_null())
                    .col(ColumnDef::new(Entries::Col).integer().not_null())
                    .col(ColumnDef::new(Entries::PlayerName).string().not_null())
                    .col(
                        ColumnDef::new(Entries::ClaimedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Entries::GameId)
                            .col(Entries::Row)
                            .col(Entries::Col),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Entries::Table, Entries::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_entries_game_player")
                    .table(Entries::Table)
                    .col(Entries::GameId)
                    .col(Entries::PlayerName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Entries {
    Table,
    GameId,
    Row,
    Col,
    PlayerName,
    ClaimedAt,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
}
