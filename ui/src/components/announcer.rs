use dioxus::prelude::*;

use crate::core::accessibility::AccessibilityService;

/// Accessibility service backed by an ARIA live region.
///
/// Browsers expose no screen-reader query, so announcements are always
/// written; the region is invisible and only assistive tech reads it.
#[derive(Clone, Copy, PartialEq)]
pub struct LiveAnnouncer {
    message: Signal<String>,
    enabled: bool,
}

impl AccessibilityService for LiveAnnouncer {
    fn screen_reader_enabled(&self) -> bool {
        self.enabled
    }

    fn announce(&self, message: &str) {
        let mut slot = self.message;
        slot.set(message.to_string());
    }
}

/// Provide the announcer for the subtree. Call once, in the shell.
pub fn use_live_announcer() -> LiveAnnouncer {
    let message = use_signal(String::new);
    use_context_provider(|| LiveAnnouncer {
        message,
        enabled: true,
    })
}

#[component]
pub fn LiveRegion() -> Element {
    let announcer = use_context::<LiveAnnouncer>();
    let message = announcer.message;

    rsx! {
        div {
            class: "visually-hidden",
            role: "status",
            aria_live: "polite",
            aria_atomic: "true",
            "{message}"
        }
    }
}
