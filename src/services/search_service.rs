use async_trait::async_trait;

use crate::error::ClientError;

/// Remote search. Implemented by `ApiClient` as `GET /search?query=`.
///
/// Results are opaque media uids in the order the server ranked them.
#[async_trait(?Send)]
pub trait SearchApi {
    async fn search(&self, query: &str) -> Result<Vec<String>, ClientError>;
}
