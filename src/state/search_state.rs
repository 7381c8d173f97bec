// ============================================================================
// SEARCH STATE - observable search store, latest request wins
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::ClientError;
use crate::services::SearchApi;
use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub fetching: bool,
    /// Media uids, server order
    pub results: Vec<String>,
    /// Query of the most recently issued search
    pub query: Option<String>,
    pub error: Option<String>,
}

/// Handle for one issued search. Only the newest ticket may settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
}

/// Shared search store. Cheap to clone; clones see the same state.
#[derive(Clone)]
pub struct SearchStore {
    state: ReactiveState<SearchState>,
    latest: Rc<Cell<u64>>,
    api: Rc<dyn SearchApi>,
}

impl PartialEq for SearchStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl SearchStore {
    pub fn new(api: Rc<dyn SearchApi>) -> Self {
        Self {
            state: ReactiveState::new(SearchState::default()),
            latest: Rc::new(Cell::new(0)),
            api,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.get()
    }

    pub fn fetching(&self) -> bool {
        self.state.with(|s| s.fetching)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    /// Fire-and-forget search. `fetching` flips before this returns; only the
    /// request itself runs on the local executor.
    pub fn run_search(&self, query: &str) {
        let ticket = self.begin(query);
        let store = self.clone();
        let query = query.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            store.complete(ticket, &query).await;
        });
    }

    /// Issues one search and waits for it to settle
    pub async fn search(&self, query: &str) {
        let ticket = self.begin(query);
        self.complete(ticket, query).await;
    }

    async fn complete(&self, ticket: SearchTicket, query: &str) -> bool {
        let result = self.api.search(query).await;
        self.settle(ticket, result)
    }

    /// Marks the store as fetching and hands out the newest ticket.
    pub fn begin(&self, query: &str) -> SearchTicket {
        let seq = self.latest.get() + 1;
        self.latest.set(seq);
        log::info!("🔍 Search #{} for {:?}", seq, query);

        self.state.update(|s| {
            s.fetching = true;
            s.query = Some(query.to_string());
            s.error = None;
        });
        SearchTicket { seq }
    }

    /// Applies a result if `ticket` is still the newest. Returns whether it was applied.
    pub fn settle(&self, ticket: SearchTicket, result: Result<Vec<String>, ClientError>) -> bool {
        if ticket.seq != self.latest.get() {
            log::debug!("⏭️ Dropping stale search #{} (latest #{})", ticket.seq, self.latest.get());
            return false;
        }

        self.state.update(|s| {
            s.fetching = false;
            match result {
                Ok(results) => {
                    log::info!("✅ Search #{}: {} results", ticket.seq, results.len());
                    s.results = results;
                    s.error = None;
                }
                Err(e) => {
                    log::error!("❌ Search #{} failed: {}", ticket.seq, e);
                    s.results.clear();
                    s.error = Some(e.to_string());
                }
            }
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeSearchApi {
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl SearchApi for FakeSearchApi {
        async fn search(&self, query: &str) -> Result<Vec<String>, ClientError> {
            self.calls.borrow_mut().push(query.to_string());
            if query == "boom" {
                return Err(ClientError::status(500, "Internal Server Error"));
            }
            Ok(vec![format!("{}-1", query), format!("{}-2", query)])
        }
    }

    fn store() -> (SearchStore, Rc<FakeSearchApi>) {
        let api = Rc::new(FakeSearchApi { calls: RefCell::new(Vec::new()) });
        (SearchStore::new(api.clone()), api)
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn begin_sets_fetching_and_settle_clears_it() {
        let (store, _) = store();
        let ticket = store.begin("foo");
        assert!(store.fetching());
        assert_eq!(store.state().query.as_deref(), Some("foo"));

        assert!(store.settle(ticket, Ok(ids(&["a", "b"]))));
        let state = store.state();
        assert!(!state.fetching);
        assert_eq!(state.results, ids(&["a", "b"]));
    }

    #[test]
    fn stale_response_is_ignored() {
        let (store, _) = store();
        let foo = store.begin("foo");
        let bar = store.begin("bar");

        // foo lands late: dropped, still waiting on bar
        assert!(!store.settle(foo, Ok(ids(&["foo-1"]))));
        assert!(store.fetching());
        assert!(store.state().results.is_empty());

        assert!(store.settle(bar, Ok(ids(&["bar-1"]))));
        assert!(!store.fetching());
        assert_eq!(store.state().results, ids(&["bar-1"]));
    }

    #[test]
    fn late_stale_response_after_latest_does_not_clobber() {
        let (store, _) = store();
        let foo = store.begin("foo");
        let bar = store.begin("bar");
        store.settle(bar, Ok(ids(&["bar-1"])));
        assert!(!store.settle(foo, Ok(ids(&["foo-1"]))));
        assert_eq!(store.state().results, ids(&["bar-1"]));
    }

    #[test]
    fn failure_settles_with_error_and_empty_results() {
        let (store, api) = store();
        block_on(store.search("boom"));

        let state = store.state();
        assert!(!state.fetching);
        assert!(state.results.is_empty());
        assert_eq!(state.error.as_deref(), Some("HTTP 500: Internal Server Error"));
        assert_eq!(*api.calls.borrow(), ids(&["boom"]));
    }

    #[test]
    fn new_search_clears_previous_error() {
        let (store, _) = store();
        block_on(store.search("boom"));
        block_on(store.search("ok"));
        let state = store.state();
        assert_eq!(state.error, None);
        assert_eq!(state.results, ids(&["ok-1", "ok-2"]));
    }

    #[test]
    fn subscribers_see_each_transition() {
        let (store, _) = store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let reader = store.clone();
            let seen = Rc::clone(&seen);
            store.subscribe(move || seen.borrow_mut().push(reader.fetching()));
        }

        block_on(store.search("foo"));

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn ticket_taken_before_request_settles_in_issue_order() {
        let (store, api) = store();
        let foo = store.begin("foo");
        let bar = store.begin("bar");

        // bar answers first, foo's late reply is dropped
        assert!(block_on(store.complete(bar, "bar")));
        assert!(!block_on(store.complete(foo, "foo")));

        assert_eq!(store.state().results, ids(&["bar-1", "bar-2"]));
        assert_eq!(*api.calls.borrow(), ids(&["bar", "foo"]));
    }

    #[test]
    fn clones_compare_equal_distinct_stores_do_not() {
        let (a, _) = store();
        let (b, _) = store();
        assert!(a == a.clone());
        assert!(a != b);
    }
}
