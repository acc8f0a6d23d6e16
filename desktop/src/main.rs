#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{use_language_provider, AppShell};
use ui::views::{About, Contact, Gallery, Home, Menu, NotFound, Testimonials};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/menu")]
    Menu {},
    #[route("/testimonials")]
    Testimonials {},
    #[route("/gallery")]
    Gallery {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let assets = ui::config::resolve_asset_dir();
    dioxus::logger::tracing::info!(assets = %assets.display(), "starting desktop shell");

    // Phone-sized window; the storefront is laid out mobile-first.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Kopi – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(420.0, 860.0)),
                )
                .with_resource_directory(assets),
        )
        .launch(App);
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
}

#[component]
fn App() -> Element {
    use_language_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Desktop layout binding the shared shell to this crate's `Route` enum.
#[component]
fn DesktopLayout() -> Element {
    let current_path = use_route::<Route>().to_string();

    rsx! {
        AppShell { current_path, Outlet::<Route> {} }
    }
}
