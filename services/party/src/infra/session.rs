//! Admin session token stores.
//!
//! The in-memory table is process-local and resets on restart. The Redis
//! variant survives restarts and lets several replicas share one session
//! table; both honor the same 24-hour TTL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::SessionStore;
use crate::domain::types::ADMIN_TOKEN_TTL_SECS;
use crate::error::PartyServiceError;

// ── In-memory store ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MemorySessionStore {
    ttl: Duration,
    tokens: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(ADMIN_TOKEN_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            tokens: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn expired(&self, created_at: DateTime<Utc>) -> bool {
        Utc::now() - created_at > self.ttl
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    async fn put(
        &self,
        token: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), PartyServiceError> {
        self.tokens
            .lock()
            .unwrap()
            .insert(token.to_owned(), created_at);
        Ok(())
    }

    async fn is_live(&self, token: &str) -> Result<bool, PartyServiceError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get(token) {
            Some(&created_at) if !self.expired(created_at) => Ok(true),
            Some(_) => {
                // Lazy expiry: the failed lookup purges the entry.
                tokens.remove(token);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    async fn sweep(&self) -> Result<u64, PartyServiceError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|_, &mut created_at| !self.expired(created_at));
        Ok((before - tokens.len()) as u64)
    }
}

// ── Redis store ──────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RedisSessionStore {
    pub pool: Pool,
}

fn session_key(token: &str) -> String {
    format!("admin_session:{token}")
}

impl SessionStore for RedisSessionStore {
    async fn put(
        &self,
        token: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), PartyServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| PartyServiceError::Internal(e.into()))?;
        let (): () = conn
            .set_ex(
                session_key(token),
                created_at.timestamp().to_string(),
                ADMIN_TOKEN_TTL_SECS as u64,
            )
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| PartyServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn is_live(&self, token: &str) -> Result<bool, PartyServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| PartyServiceError::Internal(e.into()))?;
        let value: Option<String> = conn
            .get(session_key(token))
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| PartyServiceError::Internal(e.into()))?;
        Ok(value.is_some())
    }

    async fn sweep(&self) -> Result<u64, PartyServiceError> {
        // Redis expires keys natively; nothing to purge by hand.
        Ok(0)
    }
}

// ── Backend selection ────────────────────────────────────────────────────────

/// Session backend chosen at startup: Redis when `REDIS_URL` is configured,
/// the process-local table otherwise.
#[derive(Clone)]
pub enum SessionBackend {
    Memory(MemorySessionStore),
    Redis(RedisSessionStore),
}

impl SessionStore for SessionBackend {
    async fn put(
        &self,
        token: &str,
        created_at: DateTime<Utc>,
    ) -> Result<(), PartyServiceError> {
        match self {
            Self::Memory(store) => store.put(token, created_at).await,
            Self::Redis(store) => store.put(token, created_at).await,
        }
    }

    async fn is_live(&self, token: &str) -> Result<bool, PartyServiceError> {
        match self {
            Self::Memory(store) => store.is_live(token).await,
            Self::Redis(store) => store.is_live(token).await,
        }
    }

    async fn sweep(&self) -> Result<u64, PartyServiceError> {
        match self {
            Self::Memory(store) => store.sweep().await,
            Self::Redis(store) => store.sweep().await,
        }
    }
}
