//! Input target boundary: latest-known pointer target in world coordinates
//!
//! Pointer events arrive at arbitrary low frequency. The tracker keeps the
//! latest meaningful target, filters sub-threshold jitter, and reports the
//! target as idle once it has not moved for a timeout - the motion system
//! then lets the serpent coast to a stop near it instead of oscillating.

use crate::game::constants::input;
use crate::util::vec2::Vec2;

#[derive(Debug, Clone)]
pub struct TargetTracker {
    target: Vec2,
    last_move_tick: u64,
}

impl TargetTracker {
    pub fn new(initial: Vec2) -> Self {
        Self {
            target: initial,
            last_move_tick: 0,
        }
    }

    /// Record a pointer event. Updates smaller than the minimum-movement
    /// threshold are ignored and do not reset the idle timeout.
    pub fn observe(&mut self, point: Vec2, tick: u64) {
        if point.distance_to(self.target) >= input::MIN_MOVE {
            self.target = point;
            self.last_move_tick = tick;
        }
    }

    /// Latest known target
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// True once the target has been unchanged past the idle timeout
    pub fn is_idle(&self, tick: u64) -> bool {
        tick.saturating_sub(self.last_move_tick) > input::IDLE_TIMEOUT_TICKS
    }

    /// Reset for a new life
    pub fn reset(&mut self, initial: Vec2) {
        self.target = initial;
        self.last_move_tick = 0;
    }
}
