//! Sliding navigation drawer and the context handle shared with the header.

use dioxus::prelude::*;
use tracing::debug;

use crate::components::announcer::LiveAnnouncer;
use crate::components::icons::CloseIcon;
use crate::components::language::{switch_or_warn, use_language, use_language_handle};
use crate::components::motion::use_frame_driver;
use crate::content::{find_by_path, NavRoute, NAV_ROUTES};
use crate::core::accessibility::announce_navigation;
use crate::core::drawer::DrawerState;
use crate::i18n;
use crate::t;

/// Copyable handle over the drawer state and its frame driver.
#[derive(Clone, Copy)]
pub struct DrawerContext {
    state: Signal<DrawerState>,
    driver: Coroutine<()>,
}

impl DrawerContext {
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn backdrop_visible(&self) -> bool {
        self.state.read().backdrop_visible()
    }

    /// Inline style for the panel: its transform, plus `visibility: hidden`
    /// once it has fully closed.
    pub fn style(&self) -> String {
        self.state.read().style()
    }

    pub fn toggle(mut self) {
        self.state.write().toggle();
        debug!(open = self.state.peek().is_open(), "drawer toggled");
        self.driver.send(());
    }

    pub fn close(mut self) {
        if self.state.write().close() {
            debug!("drawer closed");
            self.driver.send(());
        }
    }

    /// Feed the router's current path; closes the drawer on a route change.
    pub fn observe_route(mut self, path: &str) {
        if self.state.write().observe_route(path) {
            debug!(path, "drawer closed by navigation");
            self.driver.send(());
        }
    }
}

/// Create the drawer state and expose it to the subtree.
pub fn use_drawer_provider() -> DrawerContext {
    let state = use_signal(DrawerState::default);
    let driver = use_frame_driver(state);
    use_context_provider(|| DrawerContext { state, driver })
}

pub fn use_drawer() -> DrawerContext {
    use_context::<DrawerContext>()
}

#[component]
pub fn NavDrawer(current_path: String) -> Element {
    use_language();
    let drawer = use_drawer();
    let announcer = use_context::<LiveAnnouncer>();

    let open = drawer.is_open();
    let active = find_by_path(&current_path).map(|route| route.id);
    let panel_class = if open {
        "drawer drawer--open"
    } else {
        "drawer"
    };

    rsx! {
        if drawer.backdrop_visible() {
            div {
                class: "drawer__backdrop",
                onclick: move |_| drawer.close(),
            }
        }

        aside {
            class: "{panel_class}",
            style: "{drawer.style()}",
            aria_hidden: if open { "false" } else { "true" },
            div { class: "drawer__top",
                button {
                    r#type: "button",
                    class: "drawer__close",
                    aria_label: t!("nav-close-menu"),
                    onclick: move |_| drawer.close(),
                    CloseIcon {}
                }
            }

            nav { class: "drawer__links", aria_label: t!("nav-drawer-label"),
                for route in NAV_ROUTES.iter() {
                    DrawerLink {
                        key: "{route.path}",
                        route: *route,
                        active: active == Some(route.id),
                        onselect: move |label: String| {
                            drawer.close();
                            announce_navigation(&announcer, &label);
                        },
                    }
                }
            }

            LanguagePicker {}
        }
    }
}

#[component]
fn DrawerLink(route: NavRoute, active: bool, onselect: EventHandler<String>) -> Element {
    use_language();
    let label = route.label();
    let class = if active {
        "drawer__link drawer__link--active"
    } else {
        "drawer__link"
    };
    let announced = label.clone();

    rsx! {
        Link {
            class: "{class}",
            to: route.path,
            onclick: move |_| onselect.call(announced.clone()),
            "{label}"
        }
    }
}

/// Locale switcher. Writes the app-wide language code; subscribed
/// components re-render with the new bundle.
#[component]
fn LanguagePicker() -> Element {
    let langs = i18n::available_languages();
    let current = use_language();
    let language = use_language_handle();

    if langs.len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| match language {
        Some(language) => switch_or_warn(language, &evt.value()),
        None => tracing::warn!("no language provider; switch ignored"),
    };

    rsx! {
        div { class: "drawer__locale",
            label { class: "drawer__locale-label", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{current}",
                oninput: on_change,
                for code in langs {
                    option { key: "{code}", value: "{code}", "{i18n::language_name(&code)}" }
                }
            }
        }
    }
}
