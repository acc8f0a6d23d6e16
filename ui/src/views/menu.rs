use dioxus::prelude::*;

use crate::components::{use_entrance, use_language, use_render_window, RegistryImage};
use crate::content::MENU_CATEGORIES;
use crate::core::images::ImageArena;
use crate::t;

#[component]
pub fn Menu() -> Element {
    use_language();
    let entrance = use_entrance();
    let window = use_render_window(MENU_CATEGORIES.len());
    let arena = use_signal(ImageArena::default);

    let visible = window.read().visible(MENU_CATEGORIES);

    rsx! {
        section { class: "page page-menu", style: "{entrance.read().style()}",
            h1 { class: "page__title", {t!("menu-title")} }
            div { class: "menu__list",
                for item in visible.iter() {
                    article { key: "{item.id}", class: "card menu__card",
                        RegistryImage {
                            id: item.id,
                            src: item.image.src(),
                            alt: "{item.alt}",
                            class: "menu__image",
                            arena,
                        }
                        div { class: "menu__body",
                            h2 { class: "menu__name", "{item.title}" }
                            p { class: "menu__description", "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
