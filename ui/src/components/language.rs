//! App-wide language code.
//!
//! Localized strings are looked up at render time, so every component that
//! renders one calls [`use_language`]. The read subscribes it to the code and
//! a switch re-renders it in place with the new bundle. Local state such as
//! the drawer, entrance animations and loaded fonts is kept.

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::i18n;

/// Copyable handle over the active language code.
#[derive(Clone, Copy, PartialEq)]
pub struct Language {
    code: Signal<String>,
}

impl Language {
    pub fn code(&self) -> String {
        self.code.read().clone()
    }

    /// Select `tag` in the loader, then notify every subscribed component.
    pub fn switch(self, tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
        i18n::set_language(tag)?;
        self.publish(tag);
        info!(lang = tag, "language switched");
        Ok(())
    }

    pub(crate) fn publish(mut self, tag: &str) {
        if *self.code.peek() != tag {
            self.code.set(tag.to_string());
        }
    }
}

/// Provide the language handle for the whole app. Call once, above the router.
pub fn use_language_provider() -> Language {
    i18n::init();
    let code = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| Language { code })
}

/// Current language code. Subscribes the calling component to switches.
pub fn use_language() -> String {
    match try_use_context::<Language>() {
        Some(language) => language.code(),
        None => i18n::FALLBACK_LANGUAGE.to_string(),
    }
}

pub fn use_language_handle() -> Option<Language> {
    try_use_context::<Language>()
}

/// Log-and-ignore wrapper for UI event handlers.
pub(crate) fn switch_or_warn(language: Language, tag: &str) {
    if let Err(err) = language.switch(tag) {
        warn!(%err, lang = tag, "language switch failed");
    }
}
