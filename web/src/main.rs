use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{use_language_provider, AppShell};
use ui::views::{About, Contact, Gallery, Home, Menu, NotFound, Testimonials};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
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

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_language_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// A web-specific layout around the shared shell which allows us to use the
/// web-specific `Route` enum.
#[component]
fn WebLayout() -> Element {
    let current_path = use_route::<Route>().to_string();

    rsx! {
        AppShell { current_path, Outlet::<Route> {} }
    }
}
