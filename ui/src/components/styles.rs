use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

// Release native builds render from an embedded webview with no asset
// server, so the sheets are inlined there.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[component]
pub fn AppStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{MAIN_CSS_INLINE}" }
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }
    }
}
