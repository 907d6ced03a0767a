/// Squares service configuration loaded from environment variables.
#[derive(Debug)]
pub struct SquaresConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3121). Env var: `SQUARES_PORT`.
    pub squares_port: u16,
}

impl SquaresConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            squares_port: std::env::var("SQUARES_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3121),
        }
    }
}
