//! # habit-tracker
//!
//! Leptos + WASM client for the habit tracker backend.
//!
//! Users sign up, log in, add habits, mark them complete, and watch streaks,
//! points and badges. All scoring and persistence live in the backend; this
//! crate owns the session token lifecycle, route protection, the REST client,
//! and the pages that render it.
//!
//! Browser-only code sits behind the `csr` feature. Without it the crate
//! builds natively and the unit tests exercise the session, guard and
//! payload logic directly.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
