// ============================================================================
// STATE MODULE - Rc<RefCell> state with subscriber notifications
// ============================================================================

pub mod reactivity;
pub mod search_state;
pub mod session_state;

pub use reactivity::{ReactiveState, SubscriptionId};
pub use search_state::{SearchState, SearchStore, SearchTicket};
pub use session_state::{Session, SessionAction};
