use yew::prelude::*;

use super::MediaCardList;
use crate::hooks::{use_search_on_query, use_search_store};

#[derive(Properties, PartialEq, Clone)]
pub struct SearchResultPageProps {
    /// Route `query` parameter; `None` on `/search`
    #[prop_or_default]
    pub query: Option<String>,
}

#[function_component(SearchResultPage)]
pub fn search_result_page(props: &SearchResultPageProps) -> Html {
    let (store, state) = use_search_store();
    use_search_on_query(&store, props.query.clone());

    if state.fetching {
        return html! { <p class="pt-5 text-center">{"Searching..."}</p> };
    }

    html! {
        <>
            <h3 class="pt-5">{"Search results:"}</h3>
            if let Some(error) = state.error.clone() {
                <p class="search-error">{error}</p>
            }
            <MediaCardList uid_list={state.results.clone()} />
        </>
    }
}
