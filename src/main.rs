mod config;
mod game;
mod metrics;
mod net;
mod util;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, Level};

use crate::config::GameConfig;
use crate::game::constants::world;
use crate::game::game_loop::{GameEvent, GameLoop};
use crate::metrics::Metrics;
use crate::net::persistence::{FallbackRecordStore, HttpRecordStore, LocalRecordStore};
use crate::net::presence::PresenceHub;
use crate::util::vec2::Vec2;

/// How often the built-in driver picks a fresh wander target
const RETARGET_INTERVAL: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Neon Serpent core v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = GameConfig::load_or_default();
    config.validate().map_err(anyhow::Error::msg)?;
    info!(
        "Configuration loaded: player={}, leaderboard={}, food_pool={}",
        config.player_name, config.leaderboard_url, config.food_pool
    );

    let metrics = Arc::new(Metrics::new());

    let store = Arc::new(FallbackRecordStore::new(
        HttpRecordStore::new(config.leaderboard_url.clone()),
        LocalRecordStore::open(&config.records_path),
    ));

    // One presence session per life: announced here, cycled on every restart
    let presence = PresenceHub::new();
    let mut session = presence.announce(&config.player_name);

    let mut game = GameLoop::new();
    game.set_food_target(config.food_pool);

    let mut ticker = interval(Duration::from_millis(world::TICK_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut stats = interval(Duration::from_secs(config.stats_interval_secs));

    // Built-in wandering target driver, standing in for the pointer
    let mut rng = StdRng::from_entropy();
    let mut next_retarget = Instant::now();

    info!("Simulation started at {} Hz", world::TICK_RATE);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                if now >= next_retarget {
                    game.observe_target(Vec2::new(
                        rng.gen_range(0.0..world::SIZE),
                        rng.gen_range(0.0..world::SIZE),
                    ));
                    next_retarget = now + RETARGET_INTERVAL;
                }

                let events = game.advance(now);
                metrics.record_tick_time(now.elapsed());
                metrics.ticks.store(game.state().tick, Ordering::Relaxed);

                for event in events {
                    match event {
                        GameEvent::FoodEaten { count, .. } => {
                            metrics.food_eaten.fetch_add(count as u64, Ordering::Relaxed);
                        }
                        GameEvent::BotConsumed { count, reward } => {
                            metrics.bots_consumed.fetch_add(count as u64, Ordering::Relaxed);
                            info!(count, reward, "bot consumed");
                        }
                        GameEvent::TierChanged { from, to } => {
                            metrics.tier_changes.fetch_add(1, Ordering::Relaxed);
                            info!(?from, ?to, score = game.state().score, "tier changed");
                        }
                        GameEvent::GameOver { score, ticks } => {
                            metrics.lives_played.fetch_add(1, Ordering::Relaxed);
                            metrics.record_score(score);
                            info!(score, ticks, "game over");

                            // Record and leaderboard at the life boundary,
                            // never inside a tick
                            store.set_record(&config.player_name, score).await;
                            for (i, entry) in store.get_top(5).await.iter().enumerate() {
                                info!("  #{} {} - {}", i + 1, entry.username, entry.score);
                            }

                            // The session is scoped to the life: withdraw the
                            // ended one and announce fresh for the next
                            presence.withdraw(session);
                            game.restart(Instant::now());
                            session = presence.announce(&config.player_name);
                            info!("new life started");
                        }
                    }
                }
            }
            _ = stats.tick() => {
                info!(
                    ticks = metrics.ticks.load(Ordering::Relaxed),
                    score = game.state().score,
                    tier = ?game.state().active_tier,
                    length = game.state().player.len(),
                    food_eaten = metrics.food_eaten.load(Ordering::Relaxed),
                    bots_consumed = metrics.bots_consumed.load(Ordering::Relaxed),
                    lives = metrics.lives_played.load(Ordering::Relaxed),
                    best = metrics.best_score.load(Ordering::Relaxed),
                    tick_us_max = metrics.tick_time_max_us.load(Ordering::Relaxed),
                    uptime_s = metrics.uptime_seconds(),
                    "stats"
                );
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    presence.withdraw(session);
    info!("Simulation stopped");

    Ok(())
}
