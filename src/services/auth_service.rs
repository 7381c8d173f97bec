use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::ClientError;
use crate::models::{AuthToken, AuthTokenResponse};
use crate::utils::CookieJar;

/// Remote side of the auth flow. Implemented by `ApiClient` over HTTP.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /auth` with the current token as bearer
    async fn refresh(&self, token: &str) -> Result<AuthTokenResponse, ClientError>;

    /// `POST /auth` with username/password
    async fn login(&self, username: &str, password: &str) -> Result<AuthTokenResponse, ClientError>;
}

/// Result of the mount-time refresh check
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// No token cookie, nothing was sent
    NoToken,
    /// The server issued a new token and it was persisted
    Refreshed(AuthToken),
    /// The refresh call failed; nothing was persisted
    Failed(ClientError),
}

impl RefreshOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Refreshed(_))
    }
}

/// Reads the token cookie and, if present, trades it for a fresh one.
///
/// At most one request is sent. On success the new token is written back
/// under the same cookie name with an expiry of `now + expires_in`.
pub async fn refresh_session<A, J>(api: &A, jar: &J, cookie_name: &str, now: DateTime<Utc>) -> RefreshOutcome
where
    A: AuthApi + ?Sized,
    J: CookieJar + ?Sized,
{
    let Some(current) = jar.get(cookie_name) else {
        log::info!("🔓 No token cookie, skipping refresh");
        return RefreshOutcome::NoToken;
    };

    log::info!("🔄 Refreshing session token...");
    let result = match api.refresh(&current).await {
        Ok(response) => persist_token(jar, cookie_name, response, now),
        Err(e) => Err(e),
    };

    match result {
        Ok(token) => {
            log::info!("✅ Session refreshed, token valid until {}", token.expires_at);
            RefreshOutcome::Refreshed(token)
        }
        Err(e) => {
            log::error!("❌ Session refresh failed: {}", e);
            RefreshOutcome::Failed(e)
        }
    }
}

/// Credential login from the login screen. Persists the token exactly like a refresh.
pub async fn login<A, J>(
    api: &A,
    jar: &J,
    cookie_name: &str,
    username: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<AuthToken, ClientError>
where
    A: AuthApi + ?Sized,
    J: CookieJar + ?Sized,
{
    let response = api.login(username, password).await?;
    let token = persist_token(jar, cookie_name, response, now)?;
    log::info!("✅ Logged in as {}", username);
    Ok(token)
}

/// Drops the token cookie
pub fn logout<J: CookieJar + ?Sized>(jar: &J, cookie_name: &str) -> Result<(), ClientError> {
    log::info!("👋 Logout");
    jar.remove(cookie_name)
}

fn persist_token<J: CookieJar + ?Sized>(
    jar: &J,
    cookie_name: &str,
    response: AuthTokenResponse,
    now: DateTime<Utc>,
) -> Result<AuthToken, ClientError> {
    let token = AuthToken::from_response(response, now);
    jar.set(cookie_name, &token.value, token.expires_at)?;
    Ok(token)
}
