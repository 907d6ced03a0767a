use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminActions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminActions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminActions::Action).string().not_null())
                    .col(
                        ColumnDef::new(AdminActions::Details)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminActions::Actor).string().not_null())
                    .col(
                        ColumnDef::new(AdminActions::CreatedAt)
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
            .drop_table(Table::drop().table(AdminActions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AdminActions {
    Table,
    Id,
    Action,
    Details,
    Actor,
    CreatedAt,
}
