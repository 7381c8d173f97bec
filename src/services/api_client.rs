// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: builds requests, checks status, decodes bodies
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use crate::config::{AppConfig, CONFIG};
use crate::error::ClientError;
use crate::models::{AuthTokenResponse, LoginRequest};
use crate::services::auth_service::AuthApi;
use crate::services::search_service::SearchApi;
use crate::utils::{BrowserCookieJar, CookieJar};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(CONFIG.clone())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Bearer from the token cookie, read at call time
    fn stored_bearer(&self) -> Option<String> {
        BrowserCookieJar.get(&self.config.token_cookie_name)
    }

    /// Only 200 counts as success for the auth endpoints
    async fn expect_ok(response: Response) -> Result<Response, ClientError> {
        if response.status() == 200 {
            return Ok(response);
        }
        let status = response.status();
        let text = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => response.status_text(),
        };
        Err(ClientError::status(status, text))
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn refresh(&self, token: &str) -> Result<AuthTokenResponse, ClientError> {
        let response = Request::get(&self.url("/auth"))
            .header("Accept", "application/json")
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await?;

        Self::expect_ok(response)
            .await?
            .json::<AuthTokenResponse>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthTokenResponse, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Logging in as {}", username);

        let response = Request::post(&self.url("/auth"))
            .header("Accept", "application/json")
            .json(&body)?
            .send()
            .await?;

        Self::expect_ok(response)
            .await?
            .json::<AuthTokenResponse>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl SearchApi for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<String>, ClientError> {
        let mut request = Request::get(&self.url("/search"))
            .query([("query", query)])
            .header("Accept", "application/json");
        if let Some(token) = self.stored_bearer() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request.send().await?;
        if !response.ok() {
            return Err(ClientError::status(response.status(), response.status_text()));
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
