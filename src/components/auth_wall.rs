use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use super::LoginScreen;
use crate::config::CONFIG;
use crate::hooks::use_session;
use crate::services::{refresh_session, ApiClient, RefreshOutcome};
use crate::utils::{BrowserCookieJar, CookieJar};

/// What the gate shows for a given loading flag and session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Refresh in flight: render nothing
    Blank,
    Content,
    Login,
}

pub fn gate_view(loading: bool, logged_in: bool) -> GateView {
    match (loading, logged_in) {
        (true, _) => GateView::Blank,
        (false, true) => GateView::Content,
        (false, false) => GateView::Login,
    }
}

/// What to do once the mount-time refresh settles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateSettle {
    pub login: bool,
    pub clear_loading: bool,
}

/// Login follows the outcome even after unmount; the local flag only while mounted.
pub fn settle_gate(outcome: &RefreshOutcome, mounted: bool) -> GateSettle {
    GateSettle {
        login: outcome.is_authenticated(),
        clear_loading: mounted,
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthWallProps {
    pub children: Children,
}

/// Renders its children only for a logged-in session.
///
/// On mount, an existing token cookie is traded for a fresh one via
/// `GET /auth`; success logs the session in. Nothing is rendered until that
/// single attempt settles.
#[function_component(AuthWall)]
pub fn auth_wall(props: &AuthWallProps) -> Html {
    let session = use_session();
    let loading = use_state(|| BrowserCookieJar.get(&CONFIG.token_cookie_name).is_some());

    {
        let session = session.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));
            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = refresh_session(
                        &ApiClient::new(),
                        &BrowserCookieJar,
                        &CONFIG.token_cookie_name,
                        chrono::Utc::now(),
                    )
                    .await;

                    let settle = settle_gate(&outcome, mounted.get());
                    if settle.login {
                        session.login();
                    }

                    if settle.clear_loading {
                        loading.set(false);
                    } else {
                        log::debug!("AuthWall unmounted before refresh settled");
                    }
                });
            }
            move || mounted.set(false)
        });
    }

    match gate_view(*loading, session.logged_in()) {
        GateView::Blank => html! {},
        GateView::Content => html! { <>{ props.children.clone() }</> },
        GateView::Login => html! { <LoginScreen /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::models::AuthToken;
    use crate::state::{Session, SessionAction};
    use chrono::{DateTime, Utc};
    use yew::Reducible;

    #[test]
    fn loading_hides_everything() {
        assert_eq!(gate_view(true, false), GateView::Blank);
        assert_eq!(gate_view(true, true), GateView::Blank);
    }

    #[test]
    fn settled_gate_follows_session() {
        assert_eq!(gate_view(false, true), GateView::Content);
        assert_eq!(gate_view(false, false), GateView::Login);
    }

    fn token() -> AuthToken {
        AuthToken { value: "xyz".into(), expires_at: DateTime::<Utc>::MAX_UTC }
    }

    #[test]
    fn refreshed_token_logs_in_and_shows_children() {
        let settle = settle_gate(&RefreshOutcome::Refreshed(token()), true);
        assert_eq!(settle, GateSettle { login: true, clear_loading: true });

        let session = Rc::new(Session::default());
        let session = if settle.login { session.reduce(SessionAction::Login) } else { session };
        let loading = !settle.clear_loading;
        assert_eq!(gate_view(loading, session.logged_in), GateView::Content);
    }

    #[test]
    fn missing_token_falls_through_to_login() {
        let settle = settle_gate(&RefreshOutcome::NoToken, true);
        assert_eq!(settle, GateSettle { login: false, clear_loading: true });
        assert_eq!(gate_view(!settle.clear_loading, false), GateView::Login);
    }

    #[test]
    fn failed_refresh_falls_through_to_login() {
        let outcome = RefreshOutcome::Failed(ClientError::status(401, "Unauthorized"));
        let settle = settle_gate(&outcome, true);
        assert_eq!(settle, GateSettle { login: false, clear_loading: true });
        assert_eq!(gate_view(!settle.clear_loading, false), GateView::Login);
    }

    #[test]
    fn unmounted_gate_still_logs_in_but_leaves_local_flag() {
        let settle = settle_gate(&RefreshOutcome::Refreshed(token()), false);
        assert_eq!(settle, GateSettle { login: true, clear_loading: false });
    }
}
