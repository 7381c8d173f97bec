//! Error types shared by the service layer.

/// Everything that can go wrong talking to the API or the cookie jar.
///
/// None of these are fatal: the auth flow degrades to "not logged in" and
/// the search flow records the message in its state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Cookie error: {0}")]
    Cookie(String),
}

impl ClientError {
    pub fn status(status: u16, text: impl Into<String>) -> Self {
        Self::Status {
            status,
            text: text.into(),
        }
    }

    /// True when the server answered but refused the credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
