use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::SearchResultPage;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    SearchEmpty,
    #[at("/search/:query")]
    Search { query: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where the search box sends a submitted query
    pub fn for_query(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            Route::SearchEmpty
        } else {
            Route::Search { query: query.to_string() }
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <p class="pt-5 text-center">{"Search for a movie or series to get started."}</p>
        },
        Route::SearchEmpty => html! { <SearchResultPage /> },
        Route::Search { query } => html! { <SearchResultPage query={Some(query)} /> },
        Route::NotFound => html! { <h3 class="pt-5 text-center">{"Page not found"}</h3> },
    }
}
