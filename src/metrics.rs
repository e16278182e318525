//! Run counters for the headless runner
//!
//! Plain atomics, shared by reference between the tick driver and the stats
//! logger. There is no exporter; the stats log line is the whole surface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Metrics {
    pub ticks: AtomicU64,
    pub food_eaten: AtomicU64,
    pub bots_consumed: AtomicU64,
    pub tier_changes: AtomicU64,
    pub lives_played: AtomicU64,
    pub best_score: AtomicU64,
    /// Last tick duration in microseconds
    pub tick_time_us: AtomicU64,
    pub tick_time_max_us: AtomicU64,
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
            food_eaten: AtomicU64::new(0),
            bots_consumed: AtomicU64::new(0),
            tier_changes: AtomicU64::new(0),
            lives_played: AtomicU64::new(0),
            best_score: AtomicU64::new(0),
            tick_time_us: AtomicU64::new(0),
            tick_time_max_us: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_tick_time(&self, duration: Duration) {
        let us = duration.as_micros() as u64;
        self.tick_time_us.store(us, Ordering::Relaxed);
        self.tick_time_max_us.fetch_max(us, Ordering::Relaxed);
    }

    pub fn record_score(&self, score: u32) {
        self.best_score.fetch_max(score as u64, Ordering::Relaxed);
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
