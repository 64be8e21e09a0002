//! Mobile menu open/closed state.

use leptos::prelude::*;

use crate::icons::IconName;

const OVERLAY_OPEN: &str = "mobile-overlay translate-x-0";
const OVERLAY_CLOSED: &str = "mobile-overlay translate-x-full";

/// Whether the mobile navigation overlay is visible.
///
/// Starts closed. Lives only as long as the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the overlay is visible.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Class list for the overlay; the transform slides it in or out.
    pub fn overlay_class(self) -> &'static str {
        if self.open { OVERLAY_OPEN } else { OVERLAY_CLOSED }
    }

    /// Icon shown on the header toggle button.
    pub fn toggle_icon(self) -> IconName {
        if self.open { IconName::Close } else { IconName::Menu }
    }
}

/// Reactive handle to the menu state, owned by the page shell.
///
/// The header button calls [`MenuToggle::toggle`], every mobile nav link calls
/// [`MenuToggle::close`].
#[derive(Clone, Copy)]
pub struct MenuToggle {
    state: RwSignal<MenuState>,
}

impl MenuToggle {
    /// Closed menu.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MenuState::default()),
        }
    }

    /// See [`MenuState::toggle`].
    pub fn toggle(&self) {
        self.state.update(MenuState::toggle);
    }

    /// See [`MenuState::close`].
    pub fn close(&self) {
        self.state.update(MenuState::close);
    }

    /// Tracked read, for use inside views.
    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    /// Tracked read of the open flag.
    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_menu_icon() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert_eq!(state.toggle_icon(), IconName::Menu);
        assert_eq!(state.overlay_class(), "mobile-overlay translate-x-full");
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut state = MenuState::default();

        state.toggle();
        assert!(state.is_open());
        assert_eq!(state.overlay_class(), "mobile-overlay translate-x-0");
        assert_eq!(state.toggle_icon(), IconName::Close);

        state.toggle();
        assert!(!state.is_open());
        assert_eq!(state.overlay_class(), "mobile-overlay translate-x-full");
    }

    #[test]
    fn close_always_ends_closed() {
        let mut open = MenuState::default();
        open.toggle();
        open.close();
        assert!(!open.is_open());

        let mut closed = MenuState::default();
        closed.close();
        assert!(!closed.is_open());
    }

    #[test]
    fn reactive_handle_follows_state() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuToggle::new();
            assert!(!menu.is_open());

            menu.toggle();
            assert!(menu.is_open());

            menu.close();
            menu.close();
            assert!(!menu.is_open());
        });
    }
}
