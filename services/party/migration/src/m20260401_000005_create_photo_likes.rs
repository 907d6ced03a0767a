use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhotoLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PhotoLikes::PhotoId).uuid().not_null())
                    .col(ColumnDef::new(PhotoLikes::UserName).string().not_null())
                    .col(
                        ColumnDef::new(PhotoLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(PhotoLikes::PhotoId)
                            .col(PhotoLikes::UserName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PhotoLikes::Table, PhotoLikes::PhotoId)
                            .to(Photos::Table, Photos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PhotoLikes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PhotoLikes {
    Table,
    PhotoId,
    UserName,
    CreatedAt,
}

#[derive(Iden)]
enum Photos {
    Table,
    Id,
}
