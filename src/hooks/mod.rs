pub mod session_context;
pub mod use_search;

pub use session_context::{use_session, SessionHandle, SessionProvider};
pub use use_search::{use_search_on_query, use_search_store, QueryWatcher};
