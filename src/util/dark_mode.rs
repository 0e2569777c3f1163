//! Theme preference: `localStorage` first, then the system color scheme.
//!
//! The active theme is a `data-theme` attribute on `<html>` that the
//! stylesheet keys off. The stored flag is `"true"`/`"false"` under
//! [`DARK_MODE_STORAGE_KEY`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Native builds never touch a DOM, so tests only
//! see the pure decision helpers.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
use crate::config::DARK_MODE_STORAGE_KEY;

/// Decide the theme from a stored flag, falling back to the system setting.
/// Unrecognized stored values count as "no preference".
pub fn resolve_preference(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored.map(str::trim) {
        Some("true") => true,
        Some("false") => false,
        _ => system_prefers_dark,
    }
}

/// Value written to the `data-theme` attribute.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

fn stored_flag(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Current preference as seen by the browser; `false` natively.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(DARK_MODE_STORAGE_KEY).ok().flatten());
        let system = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        resolve_preference(stored.as_deref(), system)
    }
    #[cfg(not(feature = "csr"))]
    {
        resolve_preference(None, false)
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if el.set_attribute("data-theme", theme_name(enabled)).is_err() {
                leptos::logging::warn!("dark mode: could not set data-theme");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme_name(enabled);
    }
}

/// Flip the theme, apply it and persist it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(DARK_MODE_STORAGE_KEY, stored_flag(next)).is_err() {
                leptos::logging::warn!("dark mode: could not persist preference");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = stored_flag(next);
    }
    next
}
