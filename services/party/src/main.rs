use std::sync::Arc;
use std::time::Duration;

use sea_orm::Database;
use tracing::{info, warn};

use hawktrivia_core::cache::TimedSlot;
use hawktrivia_party::config::PartyConfig;
use hawktrivia_party::domain::types::LEADERBOARD_CACHE_TTL_SECS;
use hawktrivia_party::infra::db::DbPhotoRepository;
use hawktrivia_party::infra::demo::{MemoryPhotoRepository, PhotoBackend};
use hawktrivia_party::infra::session::{MemorySessionStore, RedisSessionStore, SessionBackend};
use hawktrivia_party::router::build_router;
use hawktrivia_party::state::AppState;

#[tokio::main]
async fn main() {
    hawktrivia_core::tracing::init_tracing();

    let config = PartyConfig::from_env();

    let db = match &config.database_url {
        Some(url) => Some(
            Database::connect(url)
                .await
                .expect("failed to connect to database"),
        ),
        None => {
            warn!("DATABASE_URL not set; running in demo mode");
            None
        }
    };

    let sessions = match &config.redis_url {
        Some(url) => {
            let redis_cfg = deadpool_redis::Config::from_url(url);
            let pool = redis_cfg
                .create_pool(Some(deadpool_redis::Runtime::Tokio1))
                .expect("failed to create Redis pool");
            SessionBackend::Redis(RedisSessionStore { pool })
        }
        None => SessionBackend::Memory(MemorySessionStore::new()),
    };

    let photos = match &db {
        Some(db) => PhotoBackend::Db(DbPhotoRepository { db: db.clone() }),
        None => PhotoBackend::Demo(MemoryPhotoRepository::demo()),
    };

    let state = AppState {
        db,
        sessions,
        photos,
        admin_secret: config.admin_secret,
        leaderboard_cache: Arc::new(TimedSlot::new(Duration::from_secs(
            LEADERBOARD_CACHE_TTL_SECS,
        ))),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.party_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("party service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
