use super::*;

#[test]
fn default_starts_light_with_nav_closed() {
    let ui = UiState::default();
    assert!(!ui.dark_mode);
    assert!(!ui.nav_open);
}

#[test]
fn toggle_nav_flips_state() {
    let mut ui = UiState::default();
    ui.toggle_nav();
    assert!(ui.nav_open);
    ui.toggle_nav();
    assert!(!ui.nav_open);
}

#[test]
fn close_nav_is_idempotent() {
    let mut ui = UiState::default();
    ui.toggle_nav();
    ui.close_nav();
    ui.close_nav();
    assert!(!ui.nav_open);
}
