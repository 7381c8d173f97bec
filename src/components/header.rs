use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;

use crate::config::CONFIG;
use crate::hooks::use_session;
use crate::router::Route;
use crate::services::logout;
use crate::utils::BrowserCookieJar;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let search_ref = use_node_ref();

    let on_search = {
        let search_ref = search_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = search_ref.cast::<HtmlInputElement>() else {
                return;
            };
            match &navigator {
                Some(nav) => nav.push(&Route::for_query(&input.value())),
                None => log::warn!("⚠️ Header rendered outside a router"),
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = logout(&BrowserCookieJar, &CONFIG.token_cookie_name) {
                log::error!("❌ Could not clear token cookie: {}", e);
            }
            session.logout();
        })
    };

    html! {
        <header class="app-header">
            <Link<Route> to={Route::Home} classes="brand">{"Storrmbox"}</Link<Route>>
            <form class="search-form" onsubmit={on_search}>
                <input
                    type="search"
                    name="query"
                    placeholder="Search..."
                    ref={search_ref}
                />
            </form>
            if session.logged_in() {
                <button type="button" class="btn-logout" onclick={on_logout}>
                    {"Log out"}
                </button>
            }
        </header>
    }
}
