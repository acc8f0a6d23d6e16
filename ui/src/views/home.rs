use dioxus::prelude::*;

use crate::components::{use_entrance, use_language, RegistryImage};
use crate::content::HERO_IMAGE;
use crate::core::images::ImageArena;
use crate::t;

#[component]
pub fn Home() -> Element {
    use_language();
    let entrance = use_entrance();
    let arena = use_signal(ImageArena::default);
    let nav = navigator();

    rsx! {
        section { class: "page page-home", style: "{entrance.read().style()}",
            div { class: "hero",
                div { class: "hero__text",
                    h1 { class: "hero__title", {t!("home-title")} }
                    p { class: "hero__subtitle", {t!("home-subtitle")} }
                    p { class: "hero__description", {t!("home-description")} }
                    div { class: "hero__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| {
                                nav.push("/gallery");
                            },
                            {t!("home-order-now")}
                        }
                        button {
                            r#type: "button",
                            class: "button button--outline",
                            onclick: move |_| {
                                nav.push("/contact");
                            },
                            {t!("home-contact-us")}
                        }
                    }
                }
                RegistryImage {
                    id: 0,
                    src: HERO_IMAGE.src(),
                    alt: t!("home-hero-alt"),
                    class: "hero__image",
                    arena,
                }
            }
        }
    }
}
