//! Screen-reader announcements.

use crate::t;

/// Host accessibility service: whether assistive output is wanted, and a way
/// to speak a short message.
pub trait AccessibilityService {
    fn screen_reader_enabled(&self) -> bool;

    fn announce(&self, message: &str);
}

/// Announce a navigation to `label` if a screen reader is active.
/// Returns `true` if something was announced.
pub fn announce_navigation(service: &dyn AccessibilityService, label: &str) -> bool {
    if !service.screen_reader_enabled() {
        return false;
    }
    let message = t!("a11y-navigating", page = label);
    service.announce(&message);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        enabled: bool,
        spoken: RefCell<Vec<String>>,
    }

    impl AccessibilityService for Recorder {
        fn screen_reader_enabled(&self) -> bool {
            self.enabled
        }

        fn announce(&self, message: &str) {
            self.spoken.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn silent_without_screen_reader() {
        let svc = Recorder {
            enabled: false,
            spoken: RefCell::new(Vec::new()),
        };
        assert!(!announce_navigation(&svc, "Menu"));
        assert!(svc.spoken.borrow().is_empty());
    }

    #[test]
    fn announces_target_page() {
        crate::i18n::init();
        let svc = Recorder {
            enabled: true,
            spoken: RefCell::new(Vec::new()),
        };
        assert!(announce_navigation(&svc, "Gallery"));
        let spoken = svc.spoken.borrow();
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].contains("Gallery"), "announcement: {}", spoken[0]);
    }
}
