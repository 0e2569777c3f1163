//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of session and habit data so theme handling
//! can change without touching either.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Initial state from the stored (or system) theme preference.
    pub fn from_preference() -> Self {
        Self { dark_mode: crate::util::dark_mode::read_preference() }
    }

    /// Label for the theme toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark_mode { "Toggle Light Mode" } else { "Toggle Dark Mode" }
    }
}
