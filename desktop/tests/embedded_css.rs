#![cfg(test)]
//! The desktop binary inlines the shared theme; make sure what it inlines is
//! the storefront theme and not an empty or stale file.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "theme is empty");
    assert!(!NAVBAR_CSS.trim().is_empty(), "navbar sheet is empty");
}

#[test]
fn brand_palette_is_declared() {
    for color in ["#343131", "#A04747", "#D8A25E", "#faf4f5"] {
        assert!(
            EMBEDDED_CSS.contains(color),
            "brand color {color} missing from theme"
        );
    }
}

#[test]
fn every_required_font_has_a_face() {
    for font in ui::config::REQUIRED_FONTS {
        let family = format!("font-family: \"{}\"", font.family);
        assert!(
            EMBEDDED_CSS.contains(&family),
            "no @font-face for {}",
            font.family
        );
        let file = font.path.rsplit('/').next().unwrap_or(font.path);
        assert!(EMBEDDED_CSS.contains(file), "font file {file} not referenced");
    }
}
