use dioxus::prelude::*;

use crate::components::icons::SocialIcon;
use crate::components::language::use_language;
use crate::content::{POLICIES, SOCIAL_LINKS};
use crate::core::links::{open_link, WebviewOpener};
use crate::t;

#[component]
pub fn Footer() -> Element {
    use_language();
    rsx! {
        footer { class: "footer",
            p { class: "footer__copyright", {t!("footer-copyright")} }
            SocialRow { class: "footer__social" }
            p { class: "footer__policies",
                for (index, policy) in POLICIES.iter().enumerate() {
                    if index > 0 {
                        span { class: "footer__separator", aria_hidden: "true", " • " }
                    }
                    span { class: "footer__policy", {policy.label()} }
                }
            }
        }
    }
}

/// Row of social buttons. Each opens its link in the system browser.
#[component]
pub fn SocialRow(class: String) -> Element {
    use_language();
    rsx! {
        div { class: "social {class}",
            for link in SOCIAL_LINKS.iter() {
                button {
                    key: "{link.url}",
                    r#type: "button",
                    class: "social__button",
                    aria_label: link.network.name(),
                    onclick: move |_| {
                        let url = link.url;
                        spawn(async move {
                            open_link(&WebviewOpener, url).await;
                        });
                    },
                    SocialIcon { network: link.network }
                }
            }
        }
    }
}
