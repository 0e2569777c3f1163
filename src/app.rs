//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast_stack::ToastStack;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::{session::Session, toast::ToastState, ui::UiState};
use crate::util::auth::RouteGuard;

/// Root application component.
///
/// Restores the session once, provides shared state contexts, and installs
/// the route guard inside the router so it sees every location change.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::restore();
    let api = ApiClient::new(&ApiConfig::from_build_env());
    let ui = RwSignal::new(UiState::from_preference());
    let toasts = RwSignal::new(ToastState::default());

    crate::util::dark_mode::apply(ui.get_untracked().dark_mode);

    provide_context(session);
    provide_context(api);
    provide_context(ui);
    provide_context(toasts);

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <Title text="Habit Tracker"/>

        <Router>
            <RouteGuard/>
            <Navbar/>
            <div class="theme-bar">
                <button class="btn btn--outlined" on:click=on_toggle_theme>
                    {move || ui.get().toggle_label()}
                </button>
            </div>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("") view=LoginPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
