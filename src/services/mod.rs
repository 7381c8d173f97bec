pub mod api_client;
pub mod auth_service;
pub mod search_service;

pub use api_client::ApiClient;
pub use auth_service::{login, logout, refresh_session, AuthApi, RefreshOutcome};
pub use search_service::SearchApi;
