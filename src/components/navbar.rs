//! Top navigation bar with the app name and public entry links.

use leptos::prelude::*;

use crate::util::auth::{LOGIN_PATH, SIGNUP_PATH};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo" aria-hidden="true">"✓"</span>
                <span class="navbar__title">"Habit Tracker"</span>
            </a>
            <span class="navbar__spacer"></span>
            <a class="navbar__link" href=LOGIN_PATH>"Login"</a>
            <a class="navbar__link" href=SIGNUP_PATH>"Signup"</a>
        </nav>
    }
}
