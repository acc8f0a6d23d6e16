//! Frame-stepped animation primitives.
//!
//! Values here are advanced by a component coroutine (see
//! `components::motion`) in fixed frame steps. They never own a timer
//! themselves, which keeps them deterministic under test.

use crate::config::SpringConfig;

/// Anything a frame driver can advance.
pub trait Animated {
    /// Advance by `dt_ms` milliseconds.
    fn step(&mut self, dt_ms: f64);

    /// `true` once the value has come to rest and no more frames are needed.
    fn is_settled(&self) -> bool;
}

/// Integration sub-step; keeps the spring stable regardless of frame length.
const SUBSTEP_MS: f64 = 1.0;

/// Damped spring moving a scalar toward a target.
///
/// Retargeting while in flight keeps the current position and velocity, so a
/// new animation supersedes the old one without a jump.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` and stop.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).abs() <= self.config.rest_displacement
            && self.velocity.abs() <= self.config.rest_speed
    }
}

impl Animated for Spring {
    fn step(&mut self, dt_ms: f64) {
        if self.is_settled() {
            return;
        }

        let mut remaining = dt_ms.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_MS);
            let dt = h / 1000.0;
            let spring_force = -self.config.stiffness() * (self.value - self.target);
            let damping_force = -self.config.damping() * self.velocity;
            self.velocity += (spring_force + damping_force) * dt;
            self.value += self.velocity * dt;
            remaining -= h;

            if self.at_rest() {
                self.snap_to(self.target);
                break;
            }
        }
    }

    fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}

/// Phase of a one-shot entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntrancePhase {
    NotStarted,
    Animating { elapsed_ms: f64 },
    Settled,
}

/// Fade/scale-in played once when a screen first mounts.
///
/// There is no way back to `NotStarted`; a settled entrance stays settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnimation {
    phase: EntrancePhase,
    duration_ms: f64,
}

impl EntranceAnimation {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            phase: EntrancePhase::NotStarted,
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    /// Begin playing. Returns `false` if the animation already started.
    pub fn start(&mut self) -> bool {
        if self.phase != EntrancePhase::NotStarted {
            return false;
        }
        self.phase = if self.duration_ms == 0.0 {
            EntrancePhase::Settled
        } else {
            EntrancePhase::Animating { elapsed_ms: 0.0 }
        };
        true
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        match self.phase {
            EntrancePhase::NotStarted => 0.0,
            EntrancePhase::Animating { elapsed_ms } => {
                ease_out_cubic(elapsed_ms / self.duration_ms)
            }
            EntrancePhase::Settled => 1.0,
        }
    }

    /// Inline style for the animated container: opacity follows progress,
    /// scale goes from 0.96 to 1.
    pub fn style(&self) -> String {
        let p = self.progress();
        let scale = 0.96 + 0.04 * p;
        format!("opacity: {p:.3}; transform: scale({scale:.4});")
    }
}

impl Animated for EntranceAnimation {
    fn step(&mut self, dt_ms: f64) {
        if let EntrancePhase::Animating { elapsed_ms } = self.phase {
            let next = elapsed_ms + dt_ms.max(0.0);
            self.phase = if next >= self.duration_ms {
                EntrancePhase::Settled
            } else {
                EntrancePhase::Animating { elapsed_ms: next }
            };
        }
    }

    /// A not-yet-started entrance counts as settled: there is nothing to
    /// drive until `start` is called.
    fn is_settled(&self) -> bool {
        !matches!(self.phase, EntrancePhase::Animating { .. })
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Step `anim` in `frame_ms` frames until it settles or `max_ms` elapses.
/// Returns the simulated time spent.
pub fn run_until_settled<A: Animated>(anim: &mut A, frame_ms: f64, max_ms: f64) -> f64 {
    let mut elapsed = 0.0;
    while !anim.is_settled() && elapsed < max_ms {
        anim.step(frame_ms);
        elapsed += frame_ms;
    }
    elapsed
}
