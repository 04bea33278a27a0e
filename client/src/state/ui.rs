//! Site-wide UI chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for navigation and theme, provided via context from `App`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Whether the mobile navigation drawer is open.
    pub nav_open: bool,
}

impl UiState {
    /// Flip the navigation drawer.
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Close the drawer, e.g. after following a link.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
