use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Body returned by `GET /auth` (refresh) and `POST /auth` (login)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthTokenResponse {
    pub token: String,
    /// Lifetime of the token in seconds
    pub expires_in: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token as persisted in the token cookie
#[derive(Clone, PartialEq, Debug)]
pub struct AuthToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn from_response(response: AuthTokenResponse, now: DateTime<Utc>) -> Self {
        let expires_at = Duration::try_seconds(response.expires_in.max(0))
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            value: response.token,
            expires_at,
        }
    }
}
