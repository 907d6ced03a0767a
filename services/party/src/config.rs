/// Party service configuration loaded from environment variables.
#[derive(Debug)]
pub struct PartyConfig {
    /// PostgreSQL connection URL. Absent → demo mode (photos only, other
    /// store-backed routes answer 503).
    pub database_url: Option<String>,
    /// Redis connection URL for shared admin sessions. Absent → in-memory
    /// session table.
    pub redis_url: Option<String>,
    /// Shared admin secret compared against client-submitted values.
    pub admin_secret: String,
    /// TCP port for the HTTP server (default 3120). Env var: `PARTY_PORT`.
    pub party_port: u16,
}

impl PartyConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            redis_url: std::env::var("REDIS_URL").ok(),
            admin_secret: std::env::var("ADMIN_SECRET").expect("ADMIN_SECRET"),
            party_port: std::env::var("PARTY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3120),
        }
    }
}
