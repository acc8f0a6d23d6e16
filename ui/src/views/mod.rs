//! Routed screens. Platform crates map their `Route` variants onto these.

mod about;
mod contact;
mod gallery;
mod home;
mod menu;
mod not_found;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use gallery::Gallery;
pub use home::Home;
pub use menu::Menu;
pub use not_found::NotFound;
pub use testimonials::Testimonials;
