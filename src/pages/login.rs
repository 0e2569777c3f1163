//! Login page: email + password exchanged for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served at `/login` and `/`. A successful response goes straight into
//! `Session::login`; a rejection leaves the session untouched and shows the
//! backend's message inline.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, GENERIC_FAILURE_MESSAGE};
use crate::net::types::LoginRequest;
use crate::state::session::Session;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Hand a freshly issued token to the session. A refused token (empty) is a
/// failed login and gets the generic form message.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn start_session(session: Session, token: String) -> Result<(), &'static str> {
    if session.login(token) { Ok(()) } else { Err(GENERIC_FAILURE_MESSAGE) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match api.login(&request).await {
                    Ok(token) => start_session(session, token).map_err(str::to_owned),
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        Err(e.form_message())
                    }
                };
                match outcome {
                    Ok(()) => navigate(crate::util::auth::DASHBOARD_PATH, NavigateOptions::default()),
                    Err(message) => {
                        let _ = error.try_set(message);
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &navigate, request, session);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="form-alert" role="alert">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            name="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            name="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
