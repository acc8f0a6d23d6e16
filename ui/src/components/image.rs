use dioxus::prelude::*;
use tracing::warn;

use crate::components::icons::ImageIcon;
use crate::core::images::{ImageArena, ImageStatus};

/// Registry image with its own load state inside `arena`.
///
/// On error the `<img>` is swapped for a placeholder; siblings sharing the
/// arena are unaffected.
#[component]
pub fn RegistryImage(
    id: u32,
    src: String,
    alt: String,
    #[props(default)] class: String,
    arena: Signal<ImageArena>,
) -> Element {
    let mut arena = arena;
    let status = arena.read().status(id);

    rsx! {
        div { class: "media {class} {status.css_modifier()}",
            if status == ImageStatus::Failed {
                div {
                    class: "media__fallback",
                    role: "img",
                    aria_label: "{alt}",
                    ImageIcon {}
                }
            } else {
                img {
                    src: "{src}",
                    alt: "{alt}",
                    loading: "lazy",
                    onload: move |_| {
                        arena.write().mark_loaded(id);
                    },
                    onerror: move |_| {
                        let mut images = arena.write();
                        if images.mark_failed(id) {
                            warn!(
                                id,
                                failed = images.failed_count(),
                                "image failed to load; showing placeholder"
                            );
                        }
                    },
                }
            }
        }
    }
}
