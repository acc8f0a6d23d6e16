use dioxus::prelude::*;

use crate::components::drawer::use_drawer;
use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::language::use_language;
use crate::config::BRAND;
use crate::t;

/// Fixed top bar: brand mark linking home and the drawer toggle.
#[component]
pub fn AppHeader() -> Element {
    use_language();
    let drawer = use_drawer();
    let open = drawer.is_open();
    let toggle_label = if open {
        t!("nav-close-menu")
    } else {
        t!("nav-open-menu")
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                Link { class: "navbar__brand", to: "/", "{BRAND}" }
                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: "{toggle_label}",
                    aria_expanded: if open { "true" } else { "false" },
                    onclick: move |_| drawer.toggle(),
                    if open {
                        CloseIcon {}
                    } else {
                        MenuIcon {}
                    }
                }
            }
        }
    }
}
