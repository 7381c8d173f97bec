use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{AuthWall, Header};
use crate::hooks::SessionProvider;
use crate::router::{switch, Route};
use crate::services::ApiClient;
use crate::state::SearchStore;

#[function_component(App)]
pub fn app() -> Html {
    // One store for the lifetime of the app
    let search_store = use_memo((), |_| SearchStore::new(Rc::new(ApiClient::new())));

    html! {
        <SessionProvider>
            <ContextProvider<SearchStore> context={(*search_store).clone()}>
                <BrowserRouter>
                    <AuthWall>
                        <Header />
                        <main class="container">
                            <Switch<Route> render={switch} />
                        </main>
                    </AuthWall>
                </BrowserRouter>
            </ContextProvider<SearchStore>>
        </SessionProvider>
    }
}
