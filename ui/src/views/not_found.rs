use dioxus::prelude::*;

use crate::components::{use_entrance, use_language};
use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_language();
    let entrance = use_entrance();
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "page page-not-found", style: "{entrance.read().style()}",
            h1 { class: "page__title", {t!("not-found-title")} }
            p { {t!("not-found-body", path = path.as_str())} }
            Link { class: "button button--primary", to: "/", {t!("not-found-home")} }
        }
    }
}
