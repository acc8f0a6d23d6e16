use dioxus::prelude::*;

use crate::components::footer::SocialRow;
use crate::components::{use_entrance, use_language, RegistryImage};
use crate::content::ABOUT_IMAGE;
use crate::core::images::ImageArena;
use crate::t;

#[component]
pub fn About() -> Element {
    use_language();
    let entrance = use_entrance();
    let arena = use_signal(ImageArena::default);

    rsx! {
        section { class: "page page-about", style: "{entrance.read().style()}",
            RegistryImage {
                id: 0,
                src: ABOUT_IMAGE.src(),
                alt: t!("about-image-alt"),
                class: "about__portrait",
                arena,
            }
            h1 { class: "page__title", {t!("about-title")} }
            div { class: "card about__card",
                p { {t!("about-body")} }
            }
            SocialRow { class: "about__social" }
        }
    }
}
