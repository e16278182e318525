//! Difficulty tiers selected by score threshold
//!
//! Tiers form a forward-only state machine: the active tier for a score is
//! the highest tier whose threshold is at or below it, and the simulation
//! never downgrades even though the score cannot decrease in this design.

use serde::{Deserialize, Serialize};

/// Difficulty/environment level identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TierId {
    Meadow,
    Grove,
    Dusk,
    Abyss,
    Inferno,
}

/// Parameters for one tier
#[derive(Debug, Clone)]
pub struct TierParams {
    pub id: TierId,
    /// Inclusive lower score bound
    pub score_threshold: u32,
    /// Bot population target
    pub bot_count: usize,
    /// Bot segment count as a fraction of the player's length
    pub bot_size_mult: f32,
    /// Bot movement multiplier
    pub bot_speed_mult: f32,
    /// Player movement multiplier
    pub player_speed_mult: f32,
    /// Threat level (drives detection radius and turn rate)
    pub threat_level: u8,
    /// Chance a bot appends a segment per growth interval
    pub bot_growth_rate: f64,
    /// Food palette hues (degrees) for this tier's theme
    pub palette: [u16; 4],
}

/// All tiers, ordered by ascending score threshold
pub const TIERS: [TierParams; 5] = [
    TierParams {
        id: TierId::Meadow,
        score_threshold: 0,
        bot_count: 3,
        bot_size_mult: 0.5,
        bot_speed_mult: 1.0,
        player_speed_mult: 1.0,
        threat_level: 1,
        bot_growth_rate: 0.15,
        palette: [90, 120, 150, 180],
    },
    TierParams {
        id: TierId::Grove,
        score_threshold: 50,
        bot_count: 5,
        bot_size_mult: 0.7,
        bot_speed_mult: 1.1,
        player_speed_mult: 1.05,
        threat_level: 2,
        bot_growth_rate: 0.2,
        palette: [160, 190, 210, 240],
    },
    TierParams {
        id: TierId::Dusk,
        score_threshold: 150,
        bot_count: 7,
        bot_size_mult: 0.9,
        bot_speed_mult: 1.25,
        player_speed_mult: 1.1,
        threat_level: 3,
        bot_growth_rate: 0.25,
        palette: [260, 280, 300, 320],
    },
    TierParams {
        id: TierId::Abyss,
        score_threshold: 300,
        bot_count: 9,
        bot_size_mult: 1.1,
        bot_speed_mult: 1.4,
        player_speed_mult: 1.15,
        threat_level: 4,
        bot_growth_rate: 0.3,
        palette: [200, 230, 330, 350],
    },
    TierParams {
        id: TierId::Inferno,
        score_threshold: 500,
        bot_count: 12,
        bot_size_mult: 1.3,
        bot_speed_mult: 1.6,
        player_speed_mult: 1.2,
        threat_level: 5,
        bot_growth_rate: 0.35,
        palette: [0, 20, 40, 60],
    },
];

impl TierId {
    /// Position in the ordered tier table
    pub fn index(&self) -> usize {
        TIERS
            .iter()
            .position(|t| t.id == *self)
            .unwrap_or(0)
    }

    pub fn params(&self) -> &'static TierParams {
        &TIERS[self.index()]
    }
}

/// Active tier for a score: the highest tier whose threshold <= score
pub fn tier_for_score(score: u32) -> TierId {
    let mut active = TIERS[0].id;
    for tier in TIERS.iter() {
        if tier.score_threshold <= score {
            active = tier.id;
        } else {
            break;
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_ascending() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].score_threshold < pair[1].score_threshold);
        }
    }

    #[test]
    fn test_threat_levels_ascending_from_one() {
        assert_eq!(TIERS[0].threat_level, 1);
        for pair in TIERS.windows(2) {
            assert!(pair[0].threat_level < pair[1].threat_level);
        }
    }

    #[test]
    fn test_tier_for_score_boundaries() {
        assert_eq!(tier_for_score(0), TierId::Meadow);
        assert_eq!(tier_for_score(49), TierId::Meadow);
        assert_eq!(tier_for_score(50), TierId::Grove);
        assert_eq!(tier_for_score(149), TierId::Grove);
        assert_eq!(tier_for_score(150), TierId::Dusk);
        assert_eq!(tier_for_score(10_000), TierId::Inferno);
    }

    #[test]
    fn test_tier_for_score_idempotent() {
        for score in [0, 50, 149, 150, 500, 777] {
            assert_eq!(tier_for_score(score), tier_for_score(score));
        }
    }

    #[test]
    fn test_tier_for_score_monotonic() {
        // Non-decreasing scores never select a tier with a lower threshold
        let mut last_threshold = 0;
        for score in 0..600 {
            let t = tier_for_score(score).params().score_threshold;
            assert!(t >= last_threshold, "tier regressed at score {}", score);
            last_threshold = t;
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, tier) in TIERS.iter().enumerate() {
            assert_eq!(tier.id.index(), i);
            assert_eq!(tier.id.params().id, tier.id);
        }
    }

    #[test]
    fn test_ordering_matches_table() {
        assert!(TierId::Meadow < TierId::Grove);
        assert!(TierId::Dusk < TierId::Inferno);
    }
}
