//! Simulation loop: fixed-cadence tick gating and the per-tick pipeline
//!
//! The loop owns all entity state. One tick runs, in order: bot motion,
//! player motion, collision/scoring, tier transition check, pool
//! replenishment. Callers may drive it from any frame rate; `advance` admits
//! ticks only when the wall clock has earned them, so a fast render loop
//! never speeds the game up and a slow one skips forward without spiraling.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::game::constants::{food, world};
use crate::game::input::TargetTracker;
use crate::game::state::{GameState, LifePhase};
use crate::game::systems::{ai, collision, motion, spawn};
use crate::game::tier::{tier_for_score, TierId};

/// Ticks recovered per `advance` call after a stall before resynchronizing
const MAX_CATCHUP_TICKS: u32 = 5;

/// Events emitted by the tick pipeline for external consumers.
/// The loop itself never performs I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    FoodEaten { count: usize, score_gained: u32 },
    BotConsumed { count: usize, reward: u32 },
    TierChanged { from: TierId, to: TierId },
    GameOver { score: u32, ticks: u64 },
}

pub struct GameLoop {
    state: GameState,
    tracker: TargetTracker,
    rng: StdRng,
    tick_interval: Duration,
    food_target: usize,
    last_tick: Instant,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded construction for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let mut state = GameState::new_life();
        spawn::replenish_food(&mut state, &mut rng, food::POOL_SIZE);
        spawn::replenish_bots(&mut state, &mut rng);
        let tracker = TargetTracker::new(state.player.head());
        Self {
            state,
            tracker,
            rng,
            tick_interval: Duration::from_millis(world::TICK_INTERVAL_MS),
            food_target: food::POOL_SIZE,
            last_tick: Instant::now(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Override the live food particle target (configured pool size)
    pub fn set_food_target(&mut self, target: usize) {
        self.food_target = target.max(1);
    }

    /// Test and driver access to the owned state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Record a pointer target in world coordinates
    pub fn observe_target(&mut self, point: crate::util::vec2::Vec2) {
        self.tracker.observe(point, self.state.tick);
    }

    /// Admit ticks earned since the last call. Render frames above the tick
    /// rate run zero ticks; a stalled caller recovers a bounded burst and
    /// then resynchronizes instead of fast-forwarding the whole gap.
    pub fn advance(&mut self, now: Instant) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut ran = 0u32;
        while now.duration_since(self.last_tick) >= self.tick_interval {
            self.last_tick += self.tick_interval;
            events.extend(self.tick());
            ran += 1;
            if ran >= MAX_CATCHUP_TICKS {
                self.last_tick = now;
                break;
            }
        }
        events
    }

    /// Run a single tick (for testing or manual control)
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if !self.state.alive() {
            // Frozen until restart
            return Vec::new();
        }

        let mut events = Vec::new();
        self.state.tick += 1;

        ai::step_bots(&mut self.state, &mut self.rng);

        let target = self.tracker.target();
        let idle = self.tracker.is_idle(self.state.tick);
        if motion::step_player(&mut self.state, target, idle) == motion::MotionOutcome::Died {
            events.push(self.game_over());
            return events;
        }

        let effects = collision::scan(&self.state);
        let applied = collision::apply(&mut self.state, &effects);
        if applied.player_died {
            events.push(self.game_over());
            return events;
        }
        if applied.food_eaten > 0 {
            events.push(GameEvent::FoodEaten {
                count: applied.food_eaten,
                score_gained: applied.food_score,
            });
        }
        if applied.bots_consumed > 0 {
            events.push(GameEvent::BotConsumed {
                count: applied.bots_consumed,
                reward: applied.bot_reward,
            });
        }

        // Forward-only tier transition, at most one step per tick
        let target_tier = tier_for_score(self.state.score);
        if target_tier > self.state.active_tier {
            let from = self.state.active_tier;
            spawn::apply_tier(&mut self.state, &mut self.rng, target_tier);
            info!(?from, to = ?target_tier, score = self.state.score, "tier transition");
            events.push(GameEvent::TierChanged {
                from,
                to: target_tier,
            });
        }

        // Consumed entities are replaced within the same tick
        spawn::replenish_food(&mut self.state, &mut self.rng, self.food_target);
        spawn::replenish_bots(&mut self.state, &mut self.rng);

        events
    }

    fn game_over(&mut self) -> GameEvent {
        debug_assert_eq!(self.state.phase, LifePhase::GameOver);
        debug!(
            score = self.state.score,
            ticks = self.state.tick,
            "life ended"
        );
        GameEvent::GameOver {
            score: self.state.score,
            ticks: self.state.tick,
        }
    }

    /// Tear down the life and rebuild everything: player at world center with
    /// the initial length, fresh food pool and tier-0 bots, score zero. No
    /// tick state leaks across the boundary.
    pub fn restart(&mut self, now: Instant) {
        self.state = GameState::new_life();
        spawn::replenish_food(&mut self.state, &mut self.rng, self.food_target);
        spawn::replenish_bots(&mut self.state, &mut self.rng);
        self.tracker.reset(self.state.player.head());
        self.last_tick = now;
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
