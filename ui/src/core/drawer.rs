//! Drawer open/closed state with its spring-animated offset.
//!
//! The offset is expressed in drawer widths: `-1.0` is fully off-screen
//! (closed), `0.0` is fully shown (open). The logical `open` flag flips
//! synchronously on every transition; only the offset lags behind.

use crate::config::{SpringConfig, DRAWER_SPRING};

use super::animation::{Animated, Spring};

pub const CLOSED_OFFSET: f64 = -1.0;
pub const OPEN_OFFSET: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerState {
    open: bool,
    offset: Spring,
    last_route: Option<String>,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::new(DRAWER_SPRING)
    }
}

impl DrawerState {
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            open: false,
            offset: Spring::new(spring, CLOSED_OFFSET),
            last_route: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Only an open drawer accepts pointer input.
    pub fn is_interactable(&self) -> bool {
        self.open
    }

    /// The backdrop exists exactly while the drawer is open.
    pub fn backdrop_visible(&self) -> bool {
        self.open
    }

    /// Current offset in drawer widths.
    pub fn offset(&self) -> f64 {
        self.offset.value()
    }

    /// CSS transform for the drawer panel (percent of its own width).
    pub fn transform(&self) -> String {
        format!("transform: translateX({:.2}%);", self.offset.value() * 100.0)
    }

    /// Inline style for the panel. Once a closed drawer has slid out it is
    /// also hidden, which takes its links out of the tab order.
    pub fn style(&self) -> String {
        if !self.is_interactable() && self.is_settled() {
            format!("{} visibility: hidden;", self.transform())
        } else {
            self.transform()
        }
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        self.set_open(true)
    }

    /// Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    /// Record the current route. A route change after the first observed
    /// route closes an open drawer. Returns `true` if the drawer closed.
    pub fn observe_route(&mut self, path: &str) -> bool {
        let changed = match self.last_route.as_deref() {
            Some(previous) => previous != path,
            None => false,
        };
        if self.last_route.as_deref() != Some(path) {
            self.last_route = Some(path.to_string());
        }
        changed && self.close()
    }

    fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        self.offset
            .set_target(if open { OPEN_OFFSET } else { CLOSED_OFFSET });
        true
    }
}

impl Animated for DrawerState {
    fn step(&mut self, dt_ms: f64) {
        self.offset.step(dt_ms);
    }

    fn is_settled(&self) -> bool {
        self.offset.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::run_until_settled;

    fn settle(drawer: &mut DrawerState) {
        run_until_settled(drawer, 16.0, 5_000.0);
        assert!(drawer.is_settled());
    }

    #[test]
    fn starts_closed_and_offscreen() {
        let drawer = DrawerState::default();
        assert!(!drawer.is_open());
        assert!(!drawer.backdrop_visible());
        assert_eq!(drawer.offset(), CLOSED_OFFSET);
        assert!(!drawer.is_interactable());
    }

    #[test]
    fn settled_offset_tracks_open_flag_for_any_toggle_sequence() {
        let sequences: &[&[u8]] = &[
            b"t",
            b"tt",
            b"ttt",
            b"oo",
            b"cc",
            b"otc",
            b"tocot",
            b"ttttttt",
        ];

        for seq in sequences {
            let mut drawer = DrawerState::default();
            for op in seq.iter() {
                match op {
                    b't' => drawer.toggle(),
                    b'o' => {
                        drawer.open();
                    }
                    b'c' => {
                        drawer.close();
                    }
                    _ => unreachable!(),
                }
                // A few frames in flight before the next event.
                drawer.step(32.0);
            }
            settle(&mut drawer);
            let expected = if drawer.is_open() { OPEN_OFFSET } else { CLOSED_OFFSET };
            assert_eq!(drawer.offset(), expected, "sequence {:?}", std::str::from_utf8(seq));
        }
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut drawer = DrawerState::default();
        assert!(drawer.open());
        assert!(!drawer.open());
        assert!(drawer.is_open());
        assert!(drawer.close());
        assert!(!drawer.close());
        assert!(!drawer.is_open());
    }

    #[test]
    fn logical_state_flips_before_animation_finishes() {
        let mut drawer = DrawerState::default();
        drawer.toggle();
        assert!(drawer.is_open());
        assert!(drawer.is_interactable());
        assert_eq!(drawer.offset(), CLOSED_OFFSET);

        drawer.step(16.0);
        drawer.toggle();
        assert!(!drawer.is_open());
        assert!(!drawer.backdrop_visible());
    }

    #[test]
    fn route_change_closes_but_first_route_does_not() {
        let mut drawer = DrawerState::default();
        drawer.open();
        assert!(!drawer.observe_route("/"));
        assert!(drawer.is_open());

        assert!(!drawer.observe_route("/"));
        assert!(drawer.is_open());

        assert!(drawer.observe_route("/menu"));
        assert!(!drawer.is_open());

        // Already closed: navigating again changes nothing.
        assert!(!drawer.observe_route("/about"));
        settle(&mut drawer);
        assert_eq!(drawer.offset(), CLOSED_OFFSET);
    }

    #[test]
    fn transform_is_percent_of_width() {
        let mut drawer = DrawerState::default();
        assert_eq!(drawer.transform(), "transform: translateX(-100.00%);");
        drawer.open();
        settle(&mut drawer);
        assert_eq!(drawer.transform(), "transform: translateX(0.00%);");
    }

    #[test]
    fn closed_panel_is_hidden_only_once_it_has_slid_out() {
        let mut drawer = DrawerState::default();
        assert!(drawer.style().contains("visibility: hidden"));

        drawer.open();
        assert!(!drawer.style().contains("visibility"));
        settle(&mut drawer);
        assert_eq!(drawer.style(), "transform: translateX(0.00%);");

        drawer.close();
        drawer.step(48.0);
        assert!(!drawer.is_settled());
        assert!(!drawer.style().contains("visibility"));

        settle(&mut drawer);
        assert_eq!(
            drawer.style(),
            "transform: translateX(-100.00%); visibility: hidden;"
        );
    }
}
