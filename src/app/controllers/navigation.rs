use crate::app::domain::SectionId;

/// Menu and active-section state. The nav bar renders whatever this says.
pub struct NavigationController {
    menu_open: bool,
    active: Option<SectionId>,
    collapsed: bool,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            menu_open: false,
            active: None,
            collapsed: false,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Hamburger activation. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Navigating always closes the collapsed menu. Returns true when the
    /// menu was open.
    pub fn close_menu(&mut self) -> bool {
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    /// Window-width collapse state. Expanding discards any open menu.
    /// Returns true when the collapse state changed.
    pub fn set_collapsed(&mut self, collapsed: bool) -> bool {
        let changed = self.collapsed != collapsed;
        self.collapsed = collapsed;
        if !collapsed {
            self.menu_open = false;
        }
        changed
    }

    /// Adopt a freshly computed active section. Returns true on change so
    /// the caller can skip repaints on every scroll tick.
    pub fn update_active(&mut self, active: Option<SectionId>) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut nav = NavigationController::new();
        assert!(!nav.menu_open());
        assert!(nav.toggle_menu());
        assert!(nav.close_menu());
        assert!(!nav.menu_open());
        // Closing an already closed menu is a no-op
        assert!(!nav.close_menu());
    }

    #[test]
    fn test_expanding_discards_open_menu() {
        let mut nav = NavigationController::new();
        nav.set_collapsed(true);
        nav.toggle_menu();
        assert!(nav.menu_open());
        assert!(nav.set_collapsed(false));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_active_change_detection() {
        let mut nav = NavigationController::new();
        assert!(nav.update_active(Some(SectionId::About)));
        assert!(!nav.update_active(Some(SectionId::About)));
        assert!(nav.update_active(None));
        assert_eq!(nav.active(), None);
    }
}
