//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend base
//! URL is captured when the crate is compiled (`HABIT_API_URL`). Everything
//! else the client persists lives under the storage keys defined here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `HABIT_API_URL` is unset or blank at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://habit-tracker-backend-b8nl.onrender.com";

/// localStorage slot holding the raw session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// localStorage slot holding the dark mode preference (`"true"`/`"false"`).
pub const DARK_MODE_STORAGE_KEY: &str = "habit_tracker_dark";

/// Typed API configuration shared with the HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `HABIT_API_URL`: backend origin, default [`DEFAULT_API_BASE_URL`]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("HABIT_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        Self { base_url: normalize_base_url(raw) }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).filter(|v| !v.is_empty());
    trimmed
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
