//! Static content registries.
//!
//! Every registry is a `&'static` slice in display order. Nothing sorts,
//! filters or mutates them; screens render them as declared.

pub mod contact;
pub mod gallery;
pub mod menu;
pub mod routes;
pub mod social;
pub mod testimonials;

pub use contact::{ContactIcon, ContactInfoLine, CONTACT_INFO};
pub use gallery::{GalleryImage, GALLERY};
pub use menu::{MenuCategory, MENU_CATEGORIES};
pub use routes::{find_by_path, NavRoute, RouteId, NAV_ROUTES};
pub use social::{PolicyKind, SocialLink, SocialNetwork, POLICIES, SOCIAL_LINKS};
pub use testimonials::{TestimonialEntry, TESTIMONIALS};

/// Public path prefix for bundled images.
pub const IMAGE_BASE: &str = "/assets/images";

/// Reference to a bundled image by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    pub fn file_name(&self) -> &'static str {
        self.0
    }

    pub fn src(&self) -> String {
        format!("{IMAGE_BASE}/{}", self.0)
    }
}

/// Hero image on the home screen.
pub const HERO_IMAGE: ImageRef = ImageRef("Cappuccino.png");

/// Portrait on the about screen.
pub const ABOUT_IMAGE: ImageRef = ImageRef("about.jpg");

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids(name: &str, ids: impl Iterator<Item = u32>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "{name}: duplicate id {id}");
        }
    }

    #[test]
    fn registry_ids_are_unique() {
        assert_unique_ids("menu", MENU_CATEGORIES.iter().map(|c| c.id));
        assert_unique_ids("testimonials", TESTIMONIALS.iter().map(|t| t.id));
        assert_unique_ids("gallery", GALLERY.iter().map(|g| g.id));
        assert_unique_ids("contact", CONTACT_INFO.iter().map(|c| c.id));
    }

    #[test]
    fn image_src_is_under_asset_base() {
        assert_eq!(HERO_IMAGE.src(), "/assets/images/Cappuccino.png");
        assert_eq!(ABOUT_IMAGE.file_name(), "about.jpg");
    }
}
