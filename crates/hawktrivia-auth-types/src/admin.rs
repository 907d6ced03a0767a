//! Admin credential extractor.
//!
//! Extraction only — whether the token is live or the secret matches is
//! decided by the party service against its session store and config.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

/// Header carrying a previously minted admin session token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Header carrying the raw shared admin secret (used before a token exists).
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Admin credential taken from the `x-admin-token` / `x-admin-secret`
/// headers. Returns 401 when neither header is present.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub token: Option<String>,
    pub secret: Option<String>,
}

impl<S> FromRequestParts<S> for AdminCredential
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Same E0195 workaround as `PlayerIdentity`: read headers synchronously,
    // return a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let secret = parts
            .headers
            .get(ADMIN_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        async move {
            if token.is_none() && secret.is_none() {
                return Err(StatusCode::UNAUTHORIZED);
            }
            Ok(Self { token, secret })
        }
    }
}
