use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::config::CONFIG;
use crate::hooks::use_session;
use crate::services::{login, ApiClient};
use crate::utils::BrowserCookieJar;

/// Shown by `AuthWall` when there is no valid session
#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let username = username_input.value().trim().to_string();
            let password = password_input.value();
            if username.is_empty() || password.is_empty() {
                error.set(Some("Please fill in both fields".to_string()));
                return;
            }

            submitting.set(true);
            error.set(None);

            let session = session.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = login(
                    &ApiClient::new(),
                    &BrowserCookieJar,
                    &CONFIG.token_cookie_name,
                    &username,
                    &password,
                    chrono::Utc::now(),
                )
                .await;

                submitting.set(false);
                match result {
                    Ok(_) => session.login(),
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        let message = if e.is_unauthorized() {
                            "Wrong username or password".to_string()
                        } else {
                            format!("Login failed: {}", e)
                        };
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Storrmbox"}</h1>
                    <p>{"Sign in to browse your library"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="login-error">{message}</p>
                    }

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
