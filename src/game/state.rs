//! Entity model: player serpent, rival bots, food particles
//!
//! Pure state - behavior lives in `game::systems` and is driven by the
//! simulation loop, which exclusively owns all collections here during a tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::game::constants::{self, food, serpent, world};
use crate::game::tier::TierId;
use crate::util::vec2::Vec2;

/// A segmented organism: ordered positions, head at the front
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Serpent {
    pub segments: VecDeque<Vec2>,
    /// Smoothed heading angle in radians
    pub heading: f32,
    /// Segments owed, consumed one per motion step
    pub pending_growth: u32,
}

impl Serpent {
    /// Build a serpent of `len` segments trailing behind `head` opposite `heading`
    pub fn with_length(head: Vec2, heading: f32, len: usize) -> Self {
        let len = len.max(1);
        let back = -Vec2::from_angle(heading);
        let segments = (0..len)
            .map(|i| (head + back * (i as f32 * serpent::SEGMENT_SIZE)).wrap(world::SIZE))
            .collect();
        Self {
            segments,
            heading,
            pending_growth: 0,
        }
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        // Construction and advance() keep the deque non-empty
        self.segments.front().copied().unwrap_or(Vec2::ZERO)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Collision radius derived from length
    pub fn radius(&self) -> f32 {
        constants::radius_for_length(self.len())
    }

    /// Prepend the new head; consume one pending growth or trim the tail.
    /// Net length change is +1 when growth was pending, 0 otherwise.
    pub fn advance(&mut self, new_head: Vec2) {
        self.segments.push_front(new_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.segments.pop_back();
        }
    }
}

/// Rival organism: a serpent plus threat parameters from the active tier.
/// Bots are anonymous and interchangeable; tier changes replace them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub body: Serpent,
    /// Display hue in degrees
    pub hue: u16,
    /// Threat level from the tier that spawned/rescaled it
    pub threat: u8,
    /// Speed multiplier from the tier
    pub speed_mult: f32,
    /// Chance of appending a segment per growth interval
    pub growth_rate: f64,
}

impl Bot {
    pub fn radius(&self) -> f32 {
        self.body.radius()
    }
}

/// Food particle type tag; rewards are implied by the tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    Normal,
    Special,
}

/// Consumable particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub position: Vec2,
    pub radius: f32,
    pub kind: FoodKind,
    /// Palette hue in degrees, themed by the active tier
    pub hue: u16,
}

impl Food {
    /// (growth, score) credited when eaten
    pub fn reward(&self) -> (u32, u32) {
        let growth = constants::growth_for_radius(self.radius);
        match self.kind {
            FoodKind::Normal => (growth, food::NORMAL_SCORE),
            FoodKind::Special => (growth + food::SPECIAL_GROWTH_BONUS, food::SPECIAL_SCORE),
        }
    }
}

/// Life phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifePhase {
    Alive,
    GameOver,
}

/// Complete simulation state for one life
#[derive(Debug, Clone)]
pub struct GameState {
    pub tick: u64,
    pub score: u32,
    pub phase: LifePhase,
    pub active_tier: TierId,
    pub player: Serpent,
    pub bots: Vec<Bot>,
    pub foods: Vec<Food>,
}

impl GameState {
    /// Fresh life: player at world center with the fixed initial length.
    /// Bots and food are populated by the spawn system before the first tick.
    pub fn new_life() -> Self {
        let center = Vec2::new(world::SIZE / 2.0, world::SIZE / 2.0);
        Self {
            tick: 0,
            score: 0,
            phase: LifePhase::Alive,
            active_tier: TierId::Meadow,
            player: Serpent::with_length(center, 0.0, serpent::INITIAL_LENGTH),
            bots: Vec::new(),
            foods: Vec::new(),
        }
    }

    pub fn alive(&self) -> bool {
        self.phase == LifePhase::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serpent_with_length() {
        let head = Vec2::new(1000.0, 1000.0);
        let s = Serpent::with_length(head, 0.0, 10);
        assert_eq!(s.len(), 10);
        assert_eq!(s.head(), head);
        assert_eq!(s.pending_growth, 0);
        // Segments trail along -x for heading 0
        assert!(s.segments[1].x < head.x);
        assert!((s.segments[1].y - head.y).abs() < 0.001);
    }

    #[test]
    fn test_serpent_with_length_wraps_near_edge() {
        let s = Serpent::with_length(Vec2::new(5.0, 5.0), 0.0, 10);
        for seg in &s.segments {
            assert!(seg.x >= 0.0 && seg.x < world::SIZE);
            assert!(seg.y >= 0.0 && seg.y < world::SIZE);
        }
    }

    #[test]
    fn test_serpent_never_constructed_empty() {
        let s = Serpent::with_length(Vec2::ZERO, 0.0, 0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut s = Serpent::with_length(Vec2::new(100.0, 100.0), 0.0, 10);
        let tail = *s.segments.back().unwrap();
        s.advance(Vec2::new(102.2, 100.0));
        assert_eq!(s.len(), 10);
        assert_eq!(s.head(), Vec2::new(102.2, 100.0));
        assert_ne!(*s.segments.back().unwrap(), tail);
    }

    #[test]
    fn test_advance_with_growth_adds_one() {
        let mut s = Serpent::with_length(Vec2::new(100.0, 100.0), 0.0, 10);
        s.pending_growth = 3;
        s.advance(Vec2::new(102.2, 100.0));
        assert_eq!(s.len(), 11);
        assert_eq!(s.pending_growth, 2);
    }

    #[test]
    fn test_advance_changes_length_by_at_most_one() {
        let mut s = Serpent::with_length(Vec2::new(100.0, 100.0), 0.0, 10);
        s.pending_growth = 100;
        for i in 0..200u32 {
            let before = s.len();
            s.advance(Vec2::new(100.0 + i as f32, 100.0));
            let after = s.len();
            assert!(after as i64 - before as i64 <= 1);
            assert!(after >= before);
        }
        // Exactly the pending amount was consumed
        assert_eq!(s.len(), 110);
        assert_eq!(s.pending_growth, 0);
    }

    #[test]
    fn test_radius_matches_length_formula() {
        let s = Serpent::with_length(Vec2::ZERO, 0.0, 30);
        assert_eq!(s.radius(), constants::radius_for_length(30));
    }

    #[test]
    fn test_food_rewards_by_kind() {
        let normal = Food {
            position: Vec2::ZERO,
            radius: 10.0,
            kind: FoodKind::Normal,
            hue: 120,
        };
        let special = Food {
            position: Vec2::ZERO,
            radius: 10.0,
            kind: FoodKind::Special,
            hue: 120,
        };
        let (ng, ns) = normal.reward();
        let (sg, ss) = special.reward();
        assert_eq!(ns, food::NORMAL_SCORE);
        assert_eq!(ss, food::SPECIAL_SCORE);
        assert!(sg > ng);
    }

    #[test]
    fn test_new_life() {
        let state = GameState::new_life();
        assert_eq!(state.tick, 0);
        assert_eq!(state.score, 0);
        assert!(state.alive());
        assert_eq!(state.active_tier, TierId::Meadow);
        assert_eq!(state.player.len(), serpent::INITIAL_LENGTH);
        let center = Vec2::new(world::SIZE / 2.0, world::SIZE / 2.0);
        assert_eq!(state.player.head(), center);
    }
}
