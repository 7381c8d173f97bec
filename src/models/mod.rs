pub mod auth;
pub mod season;

pub use auth::{AuthToken, AuthTokenResponse, LoginRequest};
pub use season::Season;
