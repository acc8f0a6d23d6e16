use dioxus::prelude::*;

use crate::components::{
    use_entrance, use_frame_driver, use_language, use_render_window, RegistryImage,
};
use crate::config::{PRESS_SCALE, PRESS_SPRING};
use crate::content::{GalleryImage, GALLERY};
use crate::core::animation::Spring;
use crate::core::images::ImageArena;
use crate::t;

#[component]
pub fn Gallery() -> Element {
    use_language();
    let entrance = use_entrance();
    let window = use_render_window(GALLERY.len());
    let arena = use_signal(ImageArena::default);

    let visible = window.read().visible(GALLERY);

    rsx! {
        section { class: "page page-gallery", style: "{entrance.read().style()}",
            h1 { class: "page__title", {t!("gallery-title")} }
            div { class: "gallery__grid",
                for image in visible.iter() {
                    GalleryCard { key: "{image.id}", image: *image, arena }
                }
            }
        }
    }
}

/// Card that zooms in while pressed and springs back on release.
#[component]
fn GalleryCard(image: GalleryImage, arena: Signal<ImageArena>) -> Element {
    let mut scale = use_signal(|| Spring::new(PRESS_SPRING, 1.0));
    let driver = use_frame_driver(scale);

    let mut press = move |target: f64| {
        scale.write().set_target(target);
        driver.send(());
    };

    rsx! {
        div {
            class: "card gallery__card",
            style: "transform: scale({scale.read().value():.4});",
            onpointerdown: move |_| press(PRESS_SCALE),
            onpointerup: move |_| press(1.0),
            onpointerleave: move |_| press(1.0),
            onpointercancel: move |_| press(1.0),
            RegistryImage {
                id: image.id,
                src: image.image.src(),
                alt: "{image.alt}",
                class: "gallery__image",
                arena,
            }
        }
    }
}
