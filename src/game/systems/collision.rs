//! Collision & scoring: player vs food, player vs bots
//!
//! Runs strictly after both motion steps on same-tick positions. The scan is
//! read-only and produces an effect list; effects are applied in a single
//! deterministic pass afterwards, so scan order can never double-count a
//! reward or skip an entity shifted by an earlier removal.

use smallvec::SmallVec;

use crate::game::constants::{food, serpent};
use crate::game::state::{GameState, LifePhase};

/// Effects produced by one collision scan
#[derive(Debug, Default)]
pub struct Effects {
    /// Indices into `state.foods` eaten this tick
    pub eaten_food: SmallVec<[usize; 8]>,
    /// Indices into `state.bots` consumed this tick
    pub consumed_bots: SmallVec<[usize; 4]>,
    /// Player lost a head-on size contest
    pub player_died: bool,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self.eaten_food.is_empty() && self.consumed_bots.is_empty() && !self.player_died
    }
}

/// Totals applied to the state, reported for replenishment and events
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub food_eaten: usize,
    pub bots_consumed: usize,
    pub food_score: u32,
    pub food_growth: u32,
    /// Combined growth-and-score credit from consumed bots
    pub bot_reward: u32,
    pub player_died: bool,
}

impl Applied {
    pub fn score_gained(&self) -> u32 {
        self.food_score + self.bot_reward
    }

    pub fn growth_gained(&self) -> u32 {
        self.food_growth + self.bot_reward
    }
}

/// Read-only scan of the post-motion state
pub fn scan(state: &GameState) -> Effects {
    let mut effects = Effects::default();
    let head = state.player.head();
    let player_radius = state.player.radius();

    for (i, f) in state.foods.iter().enumerate() {
        let threshold = (f.radius + serpent::SEGMENT_SIZE / 2.0) * food::EAT_SCALE;
        if head.distance_to(f.position) < threshold {
            effects.eaten_food.push(i);
        }
    }

    let contact_distance = serpent::SEGMENT_SIZE * serpent::SELF_COLLISION_SCALE;
    for (i, b) in state.bots.iter().enumerate() {
        // Head-to-tail: the first contacted segment decides, one outcome per bot
        for (seg_idx, seg) in b.body.segments.iter().enumerate() {
            if head.distance_to(*seg) >= contact_distance {
                continue;
            }
            if seg_idx == 0 {
                // Head-on contact is a size contest; ties go to the bot
                if player_radius > b.radius() {
                    effects.consumed_bots.push(i);
                } else {
                    effects.player_died = true;
                }
            } else {
                // Ramming the body is always safe
                effects.consumed_bots.push(i);
            }
            break;
        }
    }

    effects
}

/// Apply scanned effects in one deterministic pass.
///
/// A lost head contest ends the life immediately: nothing else from the same
/// tick is credited, matching the rule that death discards the tick's gains.
pub fn apply(state: &mut GameState, effects: &Effects) -> Applied {
    let mut applied = Applied::default();

    if effects.player_died {
        state.phase = LifePhase::GameOver;
        state.player.pending_growth = 0;
        applied.player_died = true;
        return applied;
    }

    // Remove by descending index so earlier removals don't shift later ones
    let mut eaten: SmallVec<[usize; 8]> = effects.eaten_food.clone();
    eaten.sort_unstable_by(|a, b| b.cmp(a));
    for idx in eaten {
        if idx >= state.foods.len() {
            continue;
        }
        let f = state.foods.swap_remove(idx);
        let (growth, score) = f.reward();
        applied.food_growth += growth;
        applied.food_score += score;
        applied.food_eaten += 1;
    }

    let mut consumed: SmallVec<[usize; 4]> = effects.consumed_bots.clone();
    consumed.sort_unstable_by(|a, b| b.cmp(a));
    for idx in consumed {
        if idx >= state.bots.len() {
            continue;
        }
        let b = state.bots.swap_remove(idx);
        applied.bot_reward += b.body.len() as u32;
        applied.bots_consumed += 1;
    }

    state.player.pending_growth += applied.growth_gained();
    state.score += applied.score_gained();
    applied
}
