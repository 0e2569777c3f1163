use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_preference_is_light_outside_browser() {
    assert_eq!(UiState::from_preference(), UiState::default());
}

#[test]
fn toggle_label_names_the_other_theme() {
    assert_eq!(UiState { dark_mode: false }.toggle_label(), "Toggle Dark Mode");
    assert_eq!(UiState { dark_mode: true }.toggle_label(), "Toggle Light Mode");
}
