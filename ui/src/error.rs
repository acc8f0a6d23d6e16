//! Error types for the platform seams (asset loading, link opening).
//!
//! None of these reach the user as a recoverable error: font failures become
//! the shell's error screen, image failures a placeholder, link failures a log
//! line.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("font `{family}` could not be read: {reason}")]
    FontRead { family: String, reason: String },

    #[error("font `{family}` is not a usable font file")]
    FontInvalid { family: String },

    #[error("font `{family}` was not found by the platform")]
    FontMissing { family: String },

    #[error("platform font loader failed: {0}")]
    Platform(String),
}

impl AssetError {
    /// The font family the error refers to, when there is one.
    pub fn family(&self) -> Option<&str> {
        match self {
            AssetError::FontRead { family, .. }
            | AssetError::FontInvalid { family }
            | AssetError::FontMissing { family } => Some(family),
            AssetError::Platform(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("`{0}` is not a valid URL")]
    InvalidUrl(String),

    #[error("no handler can open `{0}`")]
    Unsupported(String),

    #[error("opening `{url}` failed: {reason}")]
    OpenFailed { url: String, reason: String },
}
