//! Player motion: target-seeking with smoothed heading, growth, self-collision

use crate::game::constants::{input, serpent, world};
use crate::game::state::{GameState, LifePhase};
use crate::util::vec2::{angle_diff, Vec2};

/// Result of one player motion step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// Head advanced
    Moved,
    /// Target within stop radius, no movement this tick
    Stopped,
    /// New head hit the body; life ended, motion discarded
    Died,
}

/// Advance the player toward `target` for one tick.
///
/// `target_idle` widens the stop radius so a stale target lets the serpent
/// coast to a stop nearby instead of oscillating around the exact point.
pub fn step_player(state: &mut GameState, target: Vec2, target_idle: bool) -> MotionOutcome {
    let speed = serpent::BASE_SPEED * state.active_tier.params().player_speed_mult;
    let head = state.player.head();

    let distance = head.distance_to(target);
    let stop_radius = if target_idle {
        speed * input::COAST_STOP_FACTOR
    } else {
        speed
    };
    if distance < stop_radius {
        return MotionOutcome::Stopped;
    }

    // Blend toward the bearing along the shorter arc; the fixed factor
    // produces the characteristic curved turning instead of snapping
    let bearing = (target - head).angle();
    let heading = state.player.heading + angle_diff(state.player.heading, bearing) * serpent::HEADING_BLEND;
    let new_head = (head + Vec2::from_angle(heading) * speed).wrap(world::SIZE);

    if self_collides(state, new_head) {
        state.phase = LifePhase::GameOver;
        state.player.pending_growth = 0;
        return MotionOutcome::Died;
    }

    state.player.heading = heading;
    state.player.advance(new_head);
    MotionOutcome::Moved
}

/// New head against the body, skipping the near-head exclusion window
/// (adjacent segments would trip on the serpent's own curvature).
fn self_collides(state: &GameState, new_head: Vec2) -> bool {
    let body = &state.player.segments;
    if body.len() <= serpent::SELF_COLLISION_EXEMPT * 2 {
        return false;
    }
    let kill_distance = serpent::SEGMENT_SIZE * serpent::SELF_COLLISION_SCALE;
    body.iter()
        .skip(serpent::SELF_COLLISION_EXEMPT)
        .any(|seg| seg.distance_to(new_head) < kill_distance)
}
