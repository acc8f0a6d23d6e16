//! Static storefront configuration.
//!
//! Everything here is known at build time. The only runtime input is the
//! native asset directory, which can be overridden with `KOPI_ASSET_DIR`.

use std::path::PathBuf;

use crate::core::fonts::FontAsset;

/// Brand mark shown in the header and used for accessibility labels.
pub const BRAND: &str = "Kopi";

/// Environment variable that overrides the native asset directory.
pub const ASSET_DIR_ENV: &str = "KOPI_ASSET_DIR";

/// Fonts required before any screen is mounted.
pub const REQUIRED_FONTS: &[FontAsset] = &[
    FontAsset::new("Miniver", "fonts/Miniver-Regular.ttf"),
    FontAsset::new("PoppinsRegular", "fonts/Poppins-Regular.ttf"),
    FontAsset::new("PoppinsSemiBold", "fonts/Poppins-SemiBold.ttf"),
];

/// Origami-style spring parameters. `tension`/`friction` are the designer
/// units; the integrator works on a unit mass with [`stiffness`] and
/// [`damping`].
///
/// [`stiffness`]: SpringConfig::stiffness
/// [`damping`]: SpringConfig::damping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub rest_displacement: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(tension: f64, friction: f64) -> Self {
        Self {
            tension,
            friction,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }

    /// Spring constant for a unit mass.
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping coefficient for a unit mass.
    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }
}

/// Drawer slide spring.
pub const DRAWER_SPRING: SpringConfig = SpringConfig::new(65.0, 11.0);

/// Gallery press-zoom spring (React Native's default spring).
pub const PRESS_SPRING: SpringConfig = SpringConfig::new(40.0, 7.0);

/// Drawer width as a fraction of the viewport width.
pub const DRAWER_WIDTH_FRACTION: f64 = 0.8;

/// Scale applied to a gallery card while pressed.
pub const PRESS_SCALE: f64 = 1.1;

/// Animation frame interval in milliseconds (~60 Hz).
pub const FRAME_MS: u64 = 16;

/// Duration of the one-shot screen entrance animation.
pub const ENTRANCE_MS: f64 = 450.0;

/// Progressive list rendering: items mounted on the first frame.
pub const LIST_INITIAL_BATCH: usize = 4;

/// Progressive list rendering: items added per subsequent frame.
pub const LIST_BATCH_SIZE: usize = 2;

/// Viewport width (px) from which the home hero switches to a row layout.
pub const WIDE_LAYOUT_MIN_PX: u32 = 900;

/// Resolve the directory holding bundled assets for native builds.
///
/// Order: `KOPI_ASSET_DIR`, then the `ui` crate's `assets/` in debug builds,
/// then `assets/` next to the running executable.
pub fn resolve_asset_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(ASSET_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fonts_match_boot_set() {
        let families: Vec<_> = REQUIRED_FONTS.iter().map(|f| f.family).collect();
        assert_eq!(families, ["Miniver", "PoppinsRegular", "PoppinsSemiBold"]);
    }

    #[test]
    fn origami_units_convert_to_stiffness_and_damping() {
        assert!((DRAWER_SPRING.stiffness() - 320.7).abs() < 1e-9);
        assert_eq!(DRAWER_SPRING.damping(), 34.0);
        assert!((PRESS_SPRING.stiffness() - 230.2).abs() < 1e-9);
        assert_eq!(PRESS_SPRING.damping(), 22.0);
    }

    #[test]
    fn batch_sizes_are_positive() {
        assert!(LIST_INITIAL_BATCH > 0);
        assert!(LIST_BATCH_SIZE > 0);
    }
}
