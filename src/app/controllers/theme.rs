use crate::app::domain::{Theme, ThemeMode};

/// Resolve the effective theme. Precedence: explicit persisted choice, then
/// the OS signal, then the built-in default (dark).
pub fn resolve(mode: ThemeMode, system: Option<Theme>) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::SystemDefault => system.unwrap_or(Theme::Dark),
    }
}

/// Owns the one-bit theme state. Persistence happens only on explicit
/// toggles; while the mode is `SystemDefault` the OS keeps deciding.
pub struct ThemeController {
    mode: ThemeMode,
    effective: Theme,
}

impl ThemeController {
    pub fn new(mode: ThemeMode, system: Option<Theme>) -> Self {
        Self {
            mode,
            effective: resolve(mode, system),
        }
    }

    pub fn effective(&self) -> Theme {
        self.effective
    }

    /// The mode to persist.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn follows_system(&self) -> bool {
        self.mode == ThemeMode::SystemDefault
    }

    /// Flip the effective theme as an explicit user choice.
    pub fn toggle(&mut self) -> Theme {
        self.effective = self.effective.flipped();
        self.mode = match self.effective {
            Theme::Light => ThemeMode::Light,
            Theme::Dark => ThemeMode::Dark,
        };
        self.effective
    }

    /// Feed a fresh OS reading. Returns the new effective theme when it
    /// actually changes, which only happens while no explicit choice is in
    /// force.
    pub fn system_update(&mut self, system: Option<Theme>) -> Option<Theme> {
        if !self.follows_system() {
            return None;
        }
        let resolved = resolve(self.mode, system);
        if resolved == self.effective {
            return None;
        }
        self.effective = resolved;
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_precedence() {
        // Explicit choice wins over the OS
        assert_eq!(resolve(ThemeMode::Light, Some(Theme::Dark)), Theme::Light);
        assert_eq!(resolve(ThemeMode::Dark, Some(Theme::Light)), Theme::Dark);
        // OS signal wins when no explicit choice
        assert_eq!(
            resolve(ThemeMode::SystemDefault, Some(Theme::Light)),
            Theme::Light
        );
        // Default when nothing is known
        assert_eq!(resolve(ThemeMode::SystemDefault, None), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut ctrl = ThemeController::new(ThemeMode::SystemDefault, Some(Theme::Light));
        let original = ctrl.effective();
        ctrl.toggle();
        ctrl.toggle();
        assert_eq!(ctrl.effective(), original);
        // The round trip still pinned an explicit mode
        assert_eq!(ctrl.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_pins_explicit_mode() {
        let mut ctrl = ThemeController::new(ThemeMode::SystemDefault, Some(Theme::Dark));
        assert!(ctrl.follows_system());
        assert_eq!(ctrl.toggle(), Theme::Light);
        assert_eq!(ctrl.mode(), ThemeMode::Light);
        assert!(!ctrl.follows_system());
    }

    #[test]
    fn test_system_update_respected_only_without_choice() {
        let mut following = ThemeController::new(ThemeMode::SystemDefault, Some(Theme::Dark));
        assert_eq!(
            following.system_update(Some(Theme::Light)),
            Some(Theme::Light)
        );
        // No change, no event
        assert_eq!(following.system_update(Some(Theme::Light)), None);

        let mut pinned = ThemeController::new(ThemeMode::Dark, Some(Theme::Dark));
        assert_eq!(pinned.system_update(Some(Theme::Light)), None);
        assert_eq!(pinned.effective(), Theme::Dark);
    }
}
