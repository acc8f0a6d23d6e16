use dioxus::prelude::*;

use crate::components::icons::ContactGlyph;
use crate::components::{use_entrance, use_language, Footer};
use crate::content::CONTACT_INFO;
use crate::t;

#[component]
pub fn Contact() -> Element {
    use_language();
    let entrance = use_entrance();

    rsx! {
        section { class: "page page-contact", style: "{entrance.read().style()}",
            h1 { class: "page__title", {t!("contact-title")} }

            // Display only: nothing is sent anywhere.
            form {
                class: "card contact__form",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                input {
                    class: "contact__input",
                    r#type: "text",
                    name: "name",
                    placeholder: t!("contact-name"),
                }
                input {
                    class: "contact__input",
                    r#type: "email",
                    name: "email",
                    placeholder: t!("contact-email"),
                }
                textarea {
                    class: "contact__input contact__input--message",
                    name: "message",
                    rows: "4",
                    placeholder: t!("contact-message"),
                }
                button { r#type: "submit", class: "button button--primary", {t!("contact-submit")} }
            }

            ul { class: "contact__lines", aria_label: t!("contact-details-label"),
                for line in CONTACT_INFO.iter() {
                    li { key: "{line.id}", class: "contact__line",
                        span { class: "contact__icon", title: line.icon.label(),
                            ContactGlyph { icon: line.icon }
                        }
                        span { class: "contact__text", "{line.text}" }
                    }
                }
            }
        }
        Footer {}
    }
}
