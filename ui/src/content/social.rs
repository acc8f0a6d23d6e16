//! Footer / about-screen outbound links.

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    GitHub,
}

impl SocialNetwork {
    pub fn name(self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        network: SocialNetwork::Facebook,
        url: "https://www.facebook.com",
    },
    SocialLink {
        network: SocialNetwork::Instagram,
        url: "https://www.instagram.com",
    },
    SocialLink {
        network: SocialNetwork::GitHub,
        url: "https://www.github.com",
    },
];

/// Policy entries in the footer. They are labels only; there is no page
/// behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Privacy,
    Refund,
}

impl PolicyKind {
    pub fn label(self) -> String {
        match self {
            PolicyKind::Privacy => t!("footer-privacy"),
            PolicyKind::Refund => t!("footer-refund"),
        }
    }
}

pub const POLICIES: &[PolicyKind] = &[PolicyKind::Privacy, PolicyKind::Refund];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::links::parse_openable;

    #[test]
    fn every_social_link_is_openable() {
        for link in SOCIAL_LINKS {
            assert!(parse_openable(link.url).is_ok(), "{}", link.url);
        }
    }
}
