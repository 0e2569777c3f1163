//! Route guard keeping protected pages out of reach while signed out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once inside the router. Pages do not repeat the check (the
//! dashboard only short-circuits its own render). Logout needs no explicit
//! navigation: dropping the token flips the auth flag and the guard redirects.
//!
//! The decision is a pure function of (auth flag, location) so the reactive
//! effect and the tests share it. After a redirect the location is
//! `/login`, which is public, so re-evaluation settles without looping.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Navigational location as the guard sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Unauthenticated entry point.
    Login,
    /// Registration; exempt from the guard.
    Signup,
    /// Authenticated home.
    Dashboard,
    Root,
    Unrecognized,
}

impl AppRoute {
    /// Classify a location pathname. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Root,
            LOGIN_PATH => Self::Login,
            SIGNUP_PATH => Self::Signup,
            DASHBOARD_PATH => Self::Dashboard,
            _ => Self::Unrecognized,
        }
    }

    /// Reachable without a session.
    pub fn is_public(self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }
}

/// Where to send the user, if anywhere.
pub fn redirect_for(authenticated: bool, route: AppRoute) -> Option<&'static str> {
    if authenticated || route.is_public() {
        None
    } else {
        Some(LOGIN_PATH)
    }
}

/// Re-evaluate the redirect rule whenever the auth flag or the pathname changes.
pub fn install_route_guard<F>(session: Session, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let authenticated = Memo::new(move |_| session.is_authenticated());
    Effect::new(move || {
        enforce(authenticated.get(), &pathname.get(), &navigate);
    });
}

/// One guard evaluation: navigate (replacing history) if the location needs a
/// session the user does not have. Returns the redirect target, if any.
pub fn enforce<F>(authenticated: bool, pathname: &str, navigate: &F) -> Option<&'static str>
where
    F: Fn(&str, NavigateOptions),
{
    let route = AppRoute::from_path(pathname);
    let target = redirect_for(authenticated, route)?;
    leptos::logging::log!("route guard: {route:?} needs a session, redirecting to {target}");
    navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    Some(target)
}

/// Router child that wires the guard to the live location.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    install_route_guard(session, location.pathname, use_navigate());
}
