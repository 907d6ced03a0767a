//! Client-supplied player identity extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use hawktrivia_domain::player::{normalize_player_name, validate_player_name};

/// Header carrying the caller's display name.
pub const PLAYER_NAME_HEADER: &str = "x-player-name";

/// Player identity taken from the `x-player-name` header.
///
/// Returns 401 if the header is absent or not valid UTF-8, and 400 if the
/// name fails display-name validation. The name is normalized (trimmed)
/// before handlers see it; creator checks compare normalized names.
#[derive(Debug, Clone)]
pub struct PlayerIdentity {
    pub name: String,
}

impl<S> FromRequestParts<S> for PlayerIdentity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let raw = parts
            .headers
            .get(PLAYER_NAME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        async move {
            let raw = raw.ok_or(StatusCode::UNAUTHORIZED)?;
            if !validate_player_name(&raw) {
                return Err(StatusCode::BAD_REQUEST);
            }
            Ok(Self {
                name: normalize_player_name(&raw),
            })
        }
    }
}
