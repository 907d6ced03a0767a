use sea_orm::Database;
use tracing::info;

use hawktrivia_squares::config::SquaresConfig;
use hawktrivia_squares::router::build_router;
use hawktrivia_squares::state::AppState;

#[tokio::main]
async fn main() {
    hawktrivia_core::tracing::init_tracing();

    let config = SquaresConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.squares_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("squares service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
