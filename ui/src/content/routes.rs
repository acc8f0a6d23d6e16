//! Drawer navigation entries.

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteId {
    Home,
    About,
    Menu,
    Testimonials,
    Gallery,
    Contact,
}

impl RouteId {
    pub fn label(self) -> String {
        match self {
            RouteId::Home => t!("nav-home"),
            RouteId::About => t!("nav-about"),
            RouteId::Menu => t!("nav-menu"),
            RouteId::Testimonials => t!("nav-testimonials"),
            RouteId::Gallery => t!("nav-gallery"),
            RouteId::Contact => t!("nav-contact"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub id: RouteId,
    pub path: &'static str,
}

impl NavRoute {
    /// Exact path match; `/menu/` is not `/menu`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }

    pub fn label(&self) -> String {
        self.id.label()
    }
}

pub const NAV_ROUTES: &[NavRoute] = &[
    NavRoute {
        id: RouteId::Home,
        path: "/",
    },
    NavRoute {
        id: RouteId::About,
        path: "/about",
    },
    NavRoute {
        id: RouteId::Menu,
        path: "/menu",
    },
    NavRoute {
        id: RouteId::Testimonials,
        path: "/testimonials",
    },
    NavRoute {
        id: RouteId::Gallery,
        path: "/gallery",
    },
    NavRoute {
        id: RouteId::Contact,
        path: "/contact",
    },
];

pub fn find_by_path(path: &str) -> Option<&'static NavRoute> {
    NAV_ROUTES.iter().find(|route| route.is_active(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_entry_active_per_known_path() {
        for route in NAV_ROUTES {
            let active: Vec<_> = NAV_ROUTES
                .iter()
                .filter(|r| r.is_active(route.path))
                .map(|r| r.id)
                .collect();
            assert_eq!(active, [route.id], "path {}", route.path);
        }
    }

    #[test]
    fn unknown_paths_highlight_nothing() {
        for path in ["/NavBar", "/menu/", "/MENU", ""] {
            assert!(find_by_path(path).is_none(), "{path} matched");
        }
    }

    #[test]
    fn selecting_any_route_closes_the_drawer() {
        use crate::core::drawer::DrawerState;

        for route in NAV_ROUTES {
            let mut drawer = DrawerState::default();
            drawer.observe_route("/");
            drawer.open();
            assert!(drawer.is_open());

            // Selection closes first; the router then reports the new path.
            assert!(drawer.close());
            assert!(!drawer.observe_route(route.path));
            assert!(!drawer.is_open());
            assert!(!drawer.backdrop_visible());
        }
    }

    #[test]
    fn labels_resolve() {
        crate::i18n::init();
        for route in NAV_ROUTES {
            assert!(!route.label().is_empty());
        }
    }
}
