// ============================================================================
// USE SEARCH - store subscription + query-driven search trigger
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::{SearchState, SearchStore};

/// Tracks the last seen route query and reports when a search is due.
///
/// The first observation always fires (mount). After that it fires only when
/// the value differs from the previous one; `None` and `Some("")` are
/// distinct values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryWatcher {
    last: Option<Option<String>>,
}

impl QueryWatcher {
    pub fn observe(&mut self, query: Option<&str>) -> bool {
        let current = query.map(str::to_string);
        if self.last.as_ref() == Some(&current) {
            return false;
        }
        self.last = Some(current);
        true
    }
}

/// Nearest `SearchStore` from context, re-rendering the caller on every change.
#[hook]
pub fn use_search_store() -> (SearchStore, SearchState) {
    let fallback = use_memo((), |_| SearchStore::new(Rc::new(ApiClient::new())));
    let store = use_context::<SearchStore>().unwrap_or_else(|| (*fallback).clone());
    let update = use_force_update();

    use_effect_with(store.clone(), move |store| {
        let id = store.subscribe(move || update.force_update());
        let store = store.clone();
        move || store.unsubscribe(id)
    });

    let state = store.state();
    (store, state)
}

/// Runs a search on mount and whenever `query` changes between renders.
#[hook]
pub fn use_search_on_query(store: &SearchStore, query: Option<String>) {
    let watcher = use_mut_ref(QueryWatcher::default);
    let store = store.clone();

    use_effect(move || {
        if watcher.borrow_mut().observe(query.as_deref()) {
            store.run_search(query.as_deref().unwrap_or_default());
        }
        || ()
    });
}
