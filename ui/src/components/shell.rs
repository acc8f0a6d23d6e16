//! Layout shell: font gate, error boundary and the shared chrome.

use dioxus::prelude::*;
use tracing::{error, info};

use crate::components::announcer::{use_live_announcer, LiveRegion};
use crate::components::drawer::{use_drawer_provider, NavDrawer};
use crate::components::header::AppHeader;
use crate::components::language::use_language;
use crate::components::styles::AppStyles;
use crate::config::REQUIRED_FONTS;
use crate::core::fonts::{load_fonts, platform_font_loader, FontLoadState};
use crate::core::platform::Platform;
use crate::t;

/// Wraps every routed screen. `current_path` is the router's current path;
/// the drawer closes whenever it changes.
#[component]
pub fn AppShell(current_path: String, children: Element) -> Element {
    use_language();
    let drawer = use_drawer_provider();
    use_live_announcer();

    let fonts = use_resource(|| async move {
        let loader = platform_font_loader();
        load_fonts(loader.as_ref(), REQUIRED_FONTS).await
    });
    let mut font_state = use_signal(|| FontLoadState::NotLoaded);

    use_effect(move || {
        if let Some(outcome) = &*fonts.read() {
            if font_state.write().resolve(outcome) {
                match outcome {
                    Ok(()) => info!(platform = Platform::current().as_str(), "fonts loaded"),
                    Err(err) => error!(
                        platform = Platform::current().as_str(),
                        %err,
                        "font loading failed"
                    ),
                }
            }
        }
    });

    use_effect(use_reactive((&current_path,), move |(path,)| {
        drawer.observe_route(&path);
    }));

    rsx! {
        AppStyles {}
        div { class: "shell",
            FontGate { state: font_state(),
                ErrorBoundary {
                    handle_error: |errors: ErrorContext| {
                        if let Some(err) = errors.errors().first() {
                            error!(%err, "screen failed to render");
                        }
                        rsx! {
                            div { class: "shell-status shell-status--error", role: "alert",
                                h2 { {t!("shell-crash-title")} }
                                p { {t!("shell-crash-body")} }
                            }
                        }
                    },
                    AppHeader {}
                    NavDrawer { current_path: current_path.clone() }
                    main { class: "shell__content", {children} }
                }
            }
            LiveRegion {}
        }
    }
}

/// Nothing below the gate mounts until the fonts are in. A failed load is
/// terminal and shows the error screen instead.
#[component]
pub fn FontGate(state: FontLoadState, children: Element) -> Element {
    use_language();

    match state {
        FontLoadState::NotLoaded => rsx! {
            div { class: "shell-status", role: "status",
                div { class: "spinner", aria_hidden: "true" }
                p { class: "visually-hidden", {t!("shell-loading")} }
            }
        },
        FontLoadState::Failed(_) => rsx! {
            div { class: "shell-status shell-status--error", role: "alert",
                p { {t!("shell-font-error")} }
            }
        },
        FontLoadState::Loaded => children,
    }
}
