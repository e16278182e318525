//! Runner configuration, loaded from the environment

use crate::game::constants::food;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Display name used for records and presence
    pub player_name: String,
    /// Base URL of the leaderboard service
    pub leaderboard_url: String,
    /// Path of the local fallback record store
    pub records_path: String,
    /// Live food particle target
    pub food_pool: usize,
    /// Seconds between stats log lines
    pub stats_interval_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "anonymous".to_string(),
            leaderboard_url: "http://127.0.0.1:3000".to_string(),
            records_path: "serpent_records.json".to_string(),
            food_pool: food::POOL_SIZE,
            stats_interval_secs: 30,
        }
    }
}

impl GameConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("PLAYER_NAME") {
            if !name.trim().is_empty() {
                config.player_name = name;
            } else {
                tracing::warn!("PLAYER_NAME is empty, using default");
            }
        }

        if let Ok(url) = std::env::var("LEADERBOARD_URL") {
            config.leaderboard_url = url;
        }

        if let Ok(path) = std::env::var("RECORDS_PATH") {
            config.records_path = path;
        }

        if let Ok(pool) = std::env::var("FOOD_POOL") {
            if let Ok(parsed) = pool.parse::<usize>() {
                if parsed > 0 && parsed <= 10_000 {
                    config.food_pool = parsed;
                } else {
                    tracing::warn!("FOOD_POOL must be 1-10000, using default");
                }
            } else {
                tracing::warn!("Invalid FOOD_POOL '{}', using default", pool);
            }
        }

        if let Ok(secs) = std::env::var("STATS_INTERVAL_SECS") {
            if let Ok(parsed) = secs.parse::<u64>() {
                if parsed > 0 {
                    config.stats_interval_secs = parsed;
                } else {
                    tracing::warn!("STATS_INTERVAL_SECS must be > 0, using default");
                }
            } else {
                tracing::warn!("Invalid STATS_INTERVAL_SECS '{}', using default", secs);
            }
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), String> {
        if self.player_name.trim().is_empty() {
            return Err("player_name cannot be empty".to_string());
        }
        if self.leaderboard_url.trim().is_empty() {
            return Err("leaderboard_url cannot be empty".to_string());
        }
        if self.food_pool == 0 {
            return Err("food_pool must be at least 1".to_string());
        }
        if self.stats_interval_secs == 0 {
            return Err("stats_interval_secs must be at least 1".to_string());
        }
        Ok(())
    }
}
