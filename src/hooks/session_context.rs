// ============================================================================
// SESSION CONTEXT - share the session reducer between components
// ============================================================================

use yew::prelude::*;

use crate::state::{Session, SessionAction};

/// What consumers get from the context: the current value plus dispatchers
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    reducer: UseReducerHandle<Session>,
}

impl SessionHandle {
    pub fn logged_in(&self) -> bool {
        self.reducer.logged_in
    }

    pub fn login(&self) {
        self.reducer.dispatch(SessionAction::Login);
    }

    pub fn logout(&self) {
        self.reducer.dispatch(SessionAction::Logout);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the session reducer; wrap the app with it once
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let reducer = use_reducer(Session::default);
    let handle = SessionHandle { reducer };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Session from the nearest provider. Without one, falls back to a
/// component-local session so the tree still renders (logged out).
#[hook]
pub fn use_session() -> SessionHandle {
    let local = use_reducer(Session::default);
    use_context::<SessionHandle>().unwrap_or_else(|| {
        log::warn!("⚠️ No SessionProvider above this component, using local session");
        SessionHandle { reducer: local }
    })
}
