use sea_orm_migration::prelude::*;

use hawktrivia_squares_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
