//! Inline SVG icons. All decorative; callers supply accessible labels.

use dioxus::prelude::*;

use crate::content::{ContactIcon, SocialNetwork};

#[component]
fn Svg(children: Element) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        Svg {
            line { x1: "3", y1: "6", x2: "21", y2: "6" }
            line { x1: "3", y1: "12", x2: "21", y2: "12" }
            line { x1: "3", y1: "18", x2: "21", y2: "18" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        Svg {
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
        }
    }
}

#[component]
pub fn ImageIcon() -> Element {
    rsx! {
        Svg {
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "M21 15l-5-5L5 21" }
        }
    }
}

#[component]
pub fn SocialIcon(network: SocialNetwork) -> Element {
    match network {
        SocialNetwork::Facebook => rsx! {
            Svg { path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" } }
        },
        SocialNetwork::Instagram => rsx! {
            Svg {
                rect { x: "2", y: "2", width: "20", height: "20", rx: "5" }
                circle { cx: "12", cy: "12", r: "4" }
                line { x1: "17.5", y1: "6.5", x2: "17.51", y2: "6.5" }
            }
        },
        SocialNetwork::GitHub => rsx! {
            Svg {
                path { d: "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" }
            }
        },
    }
}

#[component]
pub fn ContactGlyph(icon: ContactIcon) -> Element {
    match icon {
        ContactIcon::MapMarker => rsx! {
            Svg {
                path { d: "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" }
                circle { cx: "12", cy: "10", r: "3" }
            }
        },
        ContactIcon::Envelope => rsx! {
            Svg {
                rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
                path { d: "M22 6l-10 7L2 6" }
            }
        },
        ContactIcon::Phone => rsx! {
            Svg {
                path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z" }
            }
        },
        ContactIcon::Clock => rsx! {
            Svg {
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M12 6v6l4 2" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: Element) -> String {
        dioxus_ssr::render_element(element)
    }

    #[test]
    fn every_icon_is_hidden_from_assistive_technology() {
        let rendered = [
            render(rsx! { MenuIcon {} }),
            render(rsx! { CloseIcon {} }),
            render(rsx! { ImageIcon {} }),
            render(rsx! { SocialIcon { network: SocialNetwork::Facebook } }),
            render(rsx! { SocialIcon { network: SocialNetwork::Instagram } }),
            render(rsx! { SocialIcon { network: SocialNetwork::GitHub } }),
            render(rsx! { ContactGlyph { icon: ContactIcon::MapMarker } }),
            render(rsx! { ContactGlyph { icon: ContactIcon::Envelope } }),
            render(rsx! { ContactGlyph { icon: ContactIcon::Phone } }),
            render(rsx! { ContactGlyph { icon: ContactIcon::Clock } }),
        ];

        for html in rendered {
            assert!(html.starts_with("<svg"), "{html}");
            assert!(html.contains(r#"aria-hidden="true""#), "{html}");
            assert!(!html.contains("aria_hidden"), "{html}");
        }
    }
}
