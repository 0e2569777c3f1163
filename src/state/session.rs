//! Session token lifecycle for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the single source of truth for "who is signed in". It is
//! restored once at startup from the token store and mirrored back into it on
//! every transition. Pages and the route guard reach it through the `Session`
//! handle provided via Leptos context; nothing else writes the store.
//!
//! STATE MACHINE
//! =============
//! `Anonymous --login--> Authenticated --logout--> Anonymous`. A login while
//! authenticated replaces the token. There is no expired state: the client
//! never inspects the token, so a dead token only shows up as a rejected
//! request.
//!
//! Every transition bumps `epoch`. Views capture a `SessionTicket` before an
//! async request and drop the response if the ticket is no longer current.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::token_store::{BrowserTokenStore, TokenStore};

/// Coarse session phase derived from token presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
}

/// Snapshot of the session epoch taken when a request starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTicket(u64);

/// Current token plus a transition counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    epoch: u64,
}

impl SessionState {
    /// Initial state for a page load: authenticated iff the store holds a token.
    pub fn restore<S: TokenStore + ?Sized>(store: &S) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        if token.is_some() {
            leptos::logging::log!("session: restored stored token");
        }
        Self { token, epoch: 0 }
    }

    /// Enter (or replace) the authenticated session.
    ///
    /// Returns `false` and leaves the state untouched when `token` is empty.
    /// A store failure is logged and the session continues in memory.
    pub fn login<S: TokenStore + ?Sized>(&mut self, token: impl Into<String>, store: &S) -> bool {
        let token = token.into();
        if token.is_empty() {
            leptos::logging::warn!("session: ignoring login with an empty token");
            return false;
        }
        if let Err(e) = store.save(&token) {
            leptos::logging::warn!("session: token kept in memory only: {e}");
        }
        self.token = Some(token);
        self.epoch = self.epoch.wrapping_add(1);
        leptos::logging::log!("session: authenticated");
        true
    }

    /// Leave the session. Safe to call repeatedly.
    pub fn logout<S: TokenStore + ?Sized>(&mut self, store: &S) {
        if let Err(e) = store.clear() {
            leptos::logging::warn!("session: could not clear stored token: {e}");
        }
        if self.token.take().is_some() {
            self.epoch = self.epoch.wrapping_add(1);
            leptos::logging::log!("session: signed out");
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn ticket(&self) -> SessionTicket {
        SessionTicket(self.epoch)
    }

    /// Whether no login/logout happened since `ticket` was taken.
    pub fn is_current(&self, ticket: SessionTicket) -> bool {
        self.epoch == ticket.0
    }

    /// Hand back a request outcome only if its session is still live.
    /// Successes and failures alike are dropped once the ticket is stale.
    pub fn admit<T>(&self, ticket: SessionTicket, outcome: T) -> Option<T> {
        self.is_current(ticket).then_some(outcome)
    }
}

/// Reactive handle to the tab's session, shared through context.
///
/// Reads are tracked so effects and views re-run on transitions; the
/// ticket helpers are untracked because they run inside async callbacks.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Restore from `localStorage`. Called once when the app mounts.
    pub fn restore() -> Self {
        Self::from_state(SessionState::restore(&BrowserTokenStore))
    }

    pub fn from_state(state: SessionState) -> Self {
        Self { state: RwSignal::new(state) }
    }

    /// Returns `false` when the token was refused (see [`SessionState::login`]).
    pub fn login(self, token: impl Into<String>) -> bool {
        let token = token.into();
        self.state.try_update(|s| s.login(token, &BrowserTokenStore)).unwrap_or(false)
    }

    pub fn logout(self) {
        self.state.update(|s| s.logout(&BrowserTokenStore));
    }

    pub fn token(self) -> Option<String> {
        self.state.with(|s| s.token().map(str::to_owned))
    }

    pub fn token_untracked(self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn is_authenticated(self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn ticket(self) -> SessionTicket {
        self.state.with_untracked(SessionState::ticket)
    }

    pub fn is_current(self, ticket: SessionTicket) -> bool {
        self.state.with_untracked(|s| s.is_current(ticket))
    }

    pub fn admit<T>(self, ticket: SessionTicket, outcome: T) -> Option<T> {
        self.state.try_with_untracked(|s| s.admit(ticket, outcome)).flatten()
    }
}
