//! Shared storefront chrome: shell, header, drawer, footer and the hooks that
//! drive their animations.

pub mod announcer;
pub mod drawer;
pub mod footer;
pub mod header;
pub mod icons;
pub mod image;
pub mod language;
pub mod motion;
pub mod shell;
pub mod styles;

pub use announcer::{use_live_announcer, LiveAnnouncer, LiveRegion};
pub use drawer::{use_drawer, use_drawer_provider, DrawerContext, NavDrawer};
pub use footer::Footer;
pub use header::AppHeader;
pub use image::RegistryImage;
pub use language::{use_language, use_language_provider, Language};
pub use motion::{use_entrance, use_frame_driver, use_render_window};
pub use shell::AppShell;
pub use styles::AppStyles;
