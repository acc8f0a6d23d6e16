//! Boot-time font loading.
//!
//! The shell asks a [`FontLoader`] for every font in
//! [`config::REQUIRED_FONTS`](crate::config::REQUIRED_FONTS) once, and folds
//! the combined outcome into a [`FontLoadState`]. That state moves exactly
//! once out of `NotLoaded` and never comes back.
//!
//! Loaders
//! -------
//! - [`DocumentFontLoader`]: asks the rendering document's `FontFaceSet`
//!   (web). The `@font-face` rules live in the shared theme.
//! - [`FileFontLoader`]: reads the font files from the asset directory and
//!   checks they are real font files (desktop / mobile). With the
//!   `validate_fonts` feature the bytes are parsed with `fontdue`.

use std::path::PathBuf;

use async_trait::async_trait;
use dioxus::prelude::document;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::AssetError;

/// A named font the app needs before it can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontAsset {
    /// Family name used by the stylesheet.
    pub family: &'static str,
    /// Path relative to the asset directory.
    pub path: &'static str,
}

impl FontAsset {
    pub const fn new(family: &'static str, path: &'static str) -> Self {
        Self { family, path }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontLoadState {
    NotLoaded,
    Loaded,
    Failed(String),
}

impl FontLoadState {
    /// Apply a load outcome. Only the first outcome counts; returns `true`
    /// if the state transitioned.
    pub fn resolve(&mut self, outcome: &Result<(), AssetError>) -> bool {
        if *self != FontLoadState::NotLoaded {
            return false;
        }
        *self = match outcome {
            Ok(()) => FontLoadState::Loaded,
            Err(err) => FontLoadState::Failed(err.to_string()),
        };
        true
    }
}

#[async_trait(?Send)]
pub trait FontLoader {
    async fn load(&self, font: &FontAsset) -> Result<(), AssetError>;
}

/// Load every font concurrently; the first failure in declaration order wins.
pub async fn load_fonts(loader: &dyn FontLoader, fonts: &[FontAsset]) -> Result<(), AssetError> {
    let outcomes = join_all(fonts.iter().map(|font| loader.load(font))).await;
    for (font, outcome) in fonts.iter().zip(outcomes) {
        match outcome {
            Ok(()) => debug!(family = font.family, "font ready"),
            Err(err) => {
                warn!(family = font.family, %err, "font failed to load");
                return Err(err);
            }
        }
    }
    Ok(())
}

/// Asks the document's `FontFaceSet` to load each family.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentFontLoader;

#[async_trait(?Send)]
impl FontLoader for DocumentFontLoader {
    async fn load(&self, font: &FontAsset) -> Result<(), AssetError> {
        let query = serde_json::to_string(&format!("1em \"{}\"", font.family))
            .map_err(|err| AssetError::Platform(err.to_string()))?;
        let script = format!(
            "const faces = await document.fonts.load({query}); return faces.length;"
        );
        let matched: u64 = document::eval(&script)
            .join()
            .await
            .map_err(|err| AssetError::Platform(format!("{err:?}")))?;

        if matched == 0 {
            return Err(AssetError::FontMissing {
                family: font.family.to_string(),
            });
        }
        Ok(())
    }
}

/// Reads font files from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileFontLoader {
    root: PathBuf,
}

impl FileFontLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait(?Send)]
impl FontLoader for FileFontLoader {
    async fn load(&self, font: &FontAsset) -> Result<(), AssetError> {
        let path = self.root.join(font.path);
        let bytes = std::fs::read(&path).map_err(|err| AssetError::FontRead {
            family: font.family.to_string(),
            reason: format!("{}: {err}", path.display()),
        })?;
        validate_font_bytes(font.family, &bytes)
    }
}

/// The loader appropriate for the current target.
pub fn platform_font_loader() -> Box<dyn FontLoader> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(DocumentFontLoader)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileFontLoader::new(crate::config::resolve_asset_dir()))
    }
}

/// Check that `bytes` look like a font file.
pub fn validate_font_bytes(family: &str, bytes: &[u8]) -> Result<(), AssetError> {
    let invalid = || AssetError::FontInvalid {
        family: family.to_string(),
    };

    if bytes.len() < 4 {
        return Err(invalid());
    }

    #[cfg(feature = "validate_fonts")]
    {
        fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map(|_| ())
            .map_err(|_| invalid())
    }

    #[cfg(not(feature = "validate_fonts"))]
    {
        const SIGNATURES: [&[u8; 4]; 6] = [
            &[0x00, 0x01, 0x00, 0x00],
            b"OTTO",
            b"true",
            b"ttcf",
            b"wOFF",
            b"wOF2",
        ];
        if SIGNATURES.iter().any(|sig| bytes.starts_with(&sig[..])) {
            Ok(())
        } else {
            Err(invalid())
        }
    }
}
