use chrono::Utc;
use rand::RngExt;

use crate::domain::repository::SessionStore;
use crate::error::PartyServiceError;

/// Mint an opaque session token: creation millis plus a random hex suffix.
/// Uniqueness rests on the randomness alone.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let suffix = rng.random_range(0..u64::MAX);
    format!("{}-{suffix:016x}", Utc::now().timestamp_millis())
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<S: SessionStore> {
    pub sessions: S,
    pub admin_secret: String,
}

impl<S: SessionStore> LoginUseCase<S> {
    pub async fn execute(&self, candidate: &str) -> Result<String, PartyServiceError> {
        // Plain equality against the configured secret, as shipped.
        if candidate != self.admin_secret {
            return Err(PartyServiceError::InvalidSecret);
        }

        // Each successful login first clears out stale sessions.
        self.sessions.sweep().await?;

        let token = generate_token();
        self.sessions.put(&token, Utc::now()).await?;
        Ok(token)
    }
}

// ── Authorize ────────────────────────────────────────────────────────────────

/// Accept either a live session token or the raw secret, in that order.
pub struct AuthorizeAdminUseCase<S: SessionStore> {
    pub sessions: S,
    pub admin_secret: String,
}

impl<S: SessionStore> AuthorizeAdminUseCase<S> {
    pub async fn execute(
        &self,
        token: Option<&str>,
        secret: Option<&str>,
    ) -> Result<(), PartyServiceError> {
        if let Some(token) = token {
            if self.sessions.is_live(token).await? {
                return Ok(());
            }
        }
        if let Some(secret) = secret {
            if secret == self.admin_secret {
                return Ok(());
            }
        }
        Err(PartyServiceError::InvalidToken)
    }
}
