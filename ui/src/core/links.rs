//! Opening external links through the host platform.
//!
//! The caller never sees an error: [`open_link`] checks capability first,
//! skips the open if the URL is unsupported, and logs any failure.

use async_trait::async_trait;
use dioxus::prelude::document;
use tracing::{debug, warn};
use url::Url;

use crate::error::LinkError;

/// Schemes the app hands to the platform.
pub const OPENABLE_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

#[async_trait(?Send)]
pub trait UrlOpener {
    /// Whether the platform can handle `url` at all.
    async fn can_open(&self, url: &str) -> bool;

    async fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// What happened to a link request. Only interesting to tests and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Opened,
    Unsupported,
    Failed(LinkError),
}

/// Check then open. Failures are logged and swallowed.
pub async fn open_link(opener: &dyn UrlOpener, url: &str) -> LinkOutcome {
    if !opener.can_open(url).await {
        warn!(url, "no handler for link; not opening");
        return LinkOutcome::Unsupported;
    }

    match opener.open(url).await {
        Ok(()) => {
            debug!(url, "link opened");
            LinkOutcome::Opened
        }
        Err(err) => {
            warn!(url, %err, "opening link failed");
            LinkOutcome::Failed(err)
        }
    }
}

/// Parse `raw` and make sure its scheme is one we hand off.
pub fn parse_openable(raw: &str) -> Result<Url, LinkError> {
    let url = Url::parse(raw).map_err(|_| LinkError::InvalidUrl(raw.to_string()))?;
    if OPENABLE_SCHEMES.contains(&url.scheme()) {
        Ok(url)
    } else {
        Err(LinkError::Unsupported(raw.to_string()))
    }
}

/// Opens links in a new browsing context of the rendering webview. Desktop
/// and mobile renderers forward new-window requests to the system browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebviewOpener;

#[async_trait(?Send)]
impl UrlOpener for WebviewOpener {
    async fn can_open(&self, url: &str) -> bool {
        parse_openable(url).is_ok()
    }

    async fn open(&self, url: &str) -> Result<(), LinkError> {
        let parsed = parse_openable(url)?;
        let target = serde_json::to_string(parsed.as_str()).map_err(|err| LinkError::OpenFailed {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
        let script = format!("window.open({target}, \"_blank\", \"noopener\"); return true;");

        document::eval(&script)
            .join::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(|err| LinkError::OpenFailed {
                url: url.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
