//! Controller state
//!
//! Tracks the current color and the Animation Mode handle for the lifetime
//! of a host session. The color is only ever mutated on the controller's
//! event loop; the animation flag is the one word shared with the worker.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use crate::color::Color;

/// Shared view of a running animation
///
/// Each start of Animation Mode installs a fresh pair of atomics, so a
/// stale worker from an earlier run can never observe a later run's flag
/// and come back to life.
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Whether the worker should keep ticking
    on: Arc<AtomicBool>,

    /// Current phase angle in degrees, written by the worker
    phase: Arc<AtomicU32>,
}

impl AnimationState {
    /// Create an idle animation state
    pub fn idle() -> Self {
        Self {
            on: Arc::new(AtomicBool::new(false)),
            phase: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Create a live animation state at phase zero
    pub fn live() -> Self {
        Self {
            on: Arc::new(AtomicBool::new(true)),
            phase: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Whether the animation is on
    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Acquire)
    }

    /// Request cooperative cancellation
    ///
    /// The worker observes the flag at least once per tick and exits.
    pub fn stop(&self) {
        self.on.store(false, Ordering::Release);
    }

    /// Current phase angle in degrees
    pub fn phase(&self) -> u32 {
        self.phase.load(Ordering::Acquire)
    }

    /// Record the worker's current phase angle
    pub(crate) fn set_phase(&self, angle_deg: u32) {
        self.phase.store(angle_deg, Ordering::Release);
    }
}

/// Mutable state owned by the streaming controller
#[derive(Debug)]
pub struct ControllerState {
    /// The last color shown to the user
    pub current: Color,

    /// Handle to the current (or most recent) animation run
    pub animation: AnimationState,
}

impl ControllerState {
    /// Initial state: full white, animation off
    pub fn new() -> Self {
        Self {
            current: Color::WHITE,
            animation: AnimationState::idle(),
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ControllerState::new();

        assert_eq!(state.current, Color::WHITE);
        assert!(!state.animation.is_on());
        assert_eq!(state.animation.phase(), 0);
    }

    #[test]
    fn test_animation_stop_is_visible_through_clones() {
        let animation = AnimationState::live();
        let worker_view = animation.clone();

        assert!(worker_view.is_on());
        animation.stop();
        assert!(!worker_view.is_on());
    }

    #[test]
    fn test_fresh_run_does_not_revive_old_worker() {
        let first_run = AnimationState::live();
        let old_worker_view = first_run.clone();

        first_run.stop();
        let second_run = AnimationState::live();

        // The old worker still sees its own run's flag as off
        assert!(!old_worker_view.is_on());
        assert!(second_run.is_on());
    }
}
