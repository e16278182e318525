//! Bot AI: pursue the player when detected, wander otherwise
//!
//! Threat level is the only per-bot difficulty lever: higher-threat bots
//! detect the player from farther away and turn faster.

use rand::Rng;

use crate::game::constants::{bot, serpent, world};
use crate::game::state::GameState;
use crate::util::vec2::{angle_diff, Vec2};

/// Detection radius for a threat level
#[inline]
pub fn detection_radius(threat: u8) -> f32 {
    bot::DETECTION_BASE + threat as f32 * bot::DETECTION_PER_THREAT
}

/// Pursuit turn rate for a threat level
#[inline]
pub fn turn_rate(threat: u8) -> f32 {
    bot::TURN_BASE + threat as f32 * bot::TURN_PER_THREAT
}

/// Advance every bot one tick. Runs before the player motion step so
/// collision scanning sees same-tick positions for both.
pub fn step_bots<R: Rng>(state: &mut GameState, rng: &mut R) {
    let player_head = state.player.head();
    let tick = state.tick;
    let growth_roll = tick > 0 && tick % bot::GROWTH_INTERVAL_TICKS == 0;

    for b in &mut state.bots {
        let head = b.body.head();
        let distance = head.distance_to(player_head);

        if distance < detection_radius(b.threat) {
            let bearing = (player_head - head).angle();
            b.body.heading += angle_diff(b.body.heading, bearing) * turn_rate(b.threat);
        } else if rng.gen_bool(bot::WANDER_CHANCE) {
            b.body.heading += rng.gen_range(-bot::WANDER_MAX_TURN..bot::WANDER_MAX_TURN);
        }

        let speed = serpent::BASE_SPEED * bot::SPEED_FACTOR * b.speed_mult;
        let new_head = (head + Vec2::from_angle(b.body.heading) * speed).wrap(world::SIZE);
        b.body.advance(new_head);

        if growth_roll && rng.gen_bool(b.growth_rate) {
            b.body.pending_growth += 1;
        }
    }
}
