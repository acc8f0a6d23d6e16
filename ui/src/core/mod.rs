//! Presentation-agnostic state models and platform seams.

pub mod accessibility;
pub mod animation;
pub mod drawer;
pub mod fonts;
pub mod images;
pub mod links;
pub mod listing;
pub mod platform;
pub mod timing;
