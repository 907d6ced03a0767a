use chrono::{Duration, Utc};

use hawktrivia_party::domain::repository::SessionStore;
use hawktrivia_party::error::PartyServiceError;
use hawktrivia_party::infra::session::MemorySessionStore;
use hawktrivia_party::usecase::admin::{AuthorizeAdminUseCase, LoginUseCase};

use crate::helpers::TEST_ADMIN_SECRET;

fn login_usecase(sessions: MemorySessionStore) -> LoginUseCase<MemorySessionStore> {
    LoginUseCase {
        sessions,
        admin_secret: TEST_ADMIN_SECRET.to_owned(),
    }
}

fn authorize_usecase(sessions: MemorySessionStore) -> AuthorizeAdminUseCase<MemorySessionStore> {
    AuthorizeAdminUseCase {
        sessions,
        admin_secret: TEST_ADMIN_SECRET.to_owned(),
    }
}

#[tokio::test]
async fn should_mint_token_for_correct_secret() {
    let sessions = MemorySessionStore::new();
    let token = login_usecase(sessions.clone())
        .execute(TEST_ADMIN_SECRET)
        .await
        .unwrap();

    assert!(!token.is_empty());
    assert!(sessions.is_live(&token).await.unwrap());
}

#[tokio::test]
async fn should_reject_wrong_secret() {
    let result = login_usecase(MemorySessionStore::new())
        .execute("not-the-secret")
        .await;
    assert!(matches!(result, Err(PartyServiceError::InvalidSecret)));
}

#[tokio::test]
async fn should_sweep_expired_tokens_on_login() {
    let sessions = MemorySessionStore::new();
    sessions
        .put("stale-token", Utc::now() - Duration::hours(25))
        .await
        .unwrap();

    login_usecase(sessions.clone())
        .execute(TEST_ADMIN_SECRET)
        .await
        .unwrap();

    assert!(!sessions.is_live("stale-token").await.unwrap());
}

#[tokio::test]
async fn should_authorize_live_token() {
    let sessions = MemorySessionStore::new();
    let token = login_usecase(sessions.clone())
        .execute(TEST_ADMIN_SECRET)
        .await
        .unwrap();

    let result = authorize_usecase(sessions).execute(Some(&token), None).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn should_authorize_raw_secret_without_token() {
    let result = authorize_usecase(MemorySessionStore::new())
        .execute(None, Some(TEST_ADMIN_SECRET))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn should_fall_back_to_secret_when_token_expired() {
    let sessions = MemorySessionStore::new();
    sessions
        .put("old-token", Utc::now() - Duration::hours(25))
        .await
        .unwrap();

    let result = authorize_usecase(sessions)
        .execute(Some("old-token"), Some(TEST_ADMIN_SECRET))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn should_reject_expired_token_without_secret() {
    let sessions = MemorySessionStore::new();
    sessions
        .put("old-token", Utc::now() - Duration::hours(25))
        .await
        .unwrap();

    let result = authorize_usecase(sessions).execute(Some("old-token"), None).await;
    assert!(matches!(result, Err(PartyServiceError::InvalidToken)));
}

#[tokio::test]
async fn should_reject_when_no_credential_matches() {
    let result = authorize_usecase(MemorySessionStore::new())
        .execute(Some("bogus"), Some("wrong"))
        .await;
    assert!(matches!(result, Err(PartyServiceError::InvalidToken)));
}
