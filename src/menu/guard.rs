/// Suppresses popup re-triggering while a menu is already open. Two
/// explicit states transitioning on open/close rather than a boolean
/// toggled in the click handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickGuard {
    #[default]
    Idle,
    MenuOpen,
}

impl ClickGuard {
    /// Called on button-down. Returns true when a menu may be shown.
    pub fn try_open(&mut self) -> bool {
        match self {
            ClickGuard::Idle => {
                *self = ClickGuard::MenuOpen;
                true
            }
            ClickGuard::MenuOpen => false,
        }
    }

    /// Called when the click sequence completes.
    pub fn close(&mut self) {
        *self = ClickGuard::Idle;
    }

    pub fn is_open(&self) -> bool {
        *self == ClickGuard::MenuOpen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_once_until_closed() {
        let mut guard = ClickGuard::default();

        assert!(guard.try_open());
        assert!(guard.is_open());
        assert!(!guard.try_open());
        assert!(!guard.try_open());

        guard.close();
        assert!(!guard.is_open());
        assert!(guard.try_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut guard = ClickGuard::default();
        guard.close();
        assert!(!guard.is_open());

        assert!(guard.try_open());
        guard.close();
        guard.close();
        assert!(guard.try_open());
    }
}
