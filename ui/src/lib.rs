//! Shared UI crate for the Kopi storefront. Every screen, component, content
//! registry and state model lives here; platform crates only launch and route.

pub mod components;
pub mod config;
pub mod content;
pub mod core;
pub mod error;
pub mod i18n;
pub mod views;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
