use dioxus::prelude::*;

use crate::components::{use_entrance, use_language, use_render_window, RegistryImage};
use crate::content::TESTIMONIALS;
use crate::core::images::ImageArena;
use crate::t;

#[component]
pub fn Testimonials() -> Element {
    use_language();
    let entrance = use_entrance();
    let window = use_render_window(TESTIMONIALS.len());
    let arena = use_signal(ImageArena::default);

    let visible = window.read().visible(TESTIMONIALS);

    rsx! {
        section { class: "page page-testimonials", style: "{entrance.read().style()}",
            h1 { class: "page__title", {t!("testimonials-title")} }
            div { class: "testimonials__track",
                for entry in visible.iter() {
                    article { key: "{entry.id}", class: "card testimonial",
                        RegistryImage {
                            id: entry.id,
                            src: entry.avatar.src(),
                            alt: "{entry.author}",
                            class: "testimonial__avatar",
                            arena,
                        }
                        h2 { class: "testimonial__name", "{entry.author}" }
                        p { class: "testimonial__quote", "{entry.quote}" }
                    }
                }
            }
        }
    }
}
