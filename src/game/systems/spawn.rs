//! Spawning and population upkeep: food pool, bot roster, tier rescale

use rand::Rng;

use crate::game::constants::{bot, food, world};
use crate::game::state::{Bot, Food, FoodKind, GameState, Serpent};
use crate::game::tier::{TierId, TierParams};
use crate::util::vec2::Vec2;

/// Nominal bot segment count for the current player length under a tier
pub fn nominal_bot_length(player_len: usize, params: &TierParams) -> usize {
    ((player_len as f32 * params.bot_size_mult).round() as usize).max(bot::MIN_LENGTH)
}

/// One food particle themed by the active tier's palette
pub fn spawn_food<R: Rng>(rng: &mut R, tier: TierId) -> Food {
    let palette = tier.params().palette;
    let kind = if rng.gen_bool(food::SPECIAL_CHANCE) {
        FoodKind::Special
    } else {
        FoodKind::Normal
    };
    Food {
        position: Vec2::new(
            rng.gen_range(0.0..world::SIZE),
            rng.gen_range(0.0..world::SIZE),
        ),
        radius: rng.gen_range(food::MIN_RADIUS..=food::MAX_RADIUS),
        kind,
        hue: palette[rng.gen_range(0..palette.len())],
    }
}

/// Top the food pool back up to `target`. Newly spawned particles take the
/// active tier's palette, so a tier change recolors the pool organically as
/// particles are eaten and replaced.
pub fn replenish_food<R: Rng>(state: &mut GameState, rng: &mut R, target: usize) {
    while state.foods.len() < target {
        let f = spawn_food(rng, state.active_tier);
        state.foods.push(f);
    }
}

/// One bot at a random position away from the player.
///
/// Rejection-sampled up to a fixed attempt cap; a crowded world degrades to
/// accepting the last candidate rather than spinning.
pub fn spawn_bot<R: Rng>(rng: &mut R, player: &Serpent, params: &TierParams) -> Bot {
    let player_head = player.head();
    let mut position = random_position(rng);
    for _ in 0..bot::MAX_SPAWN_ATTEMPTS {
        if position.distance_to(player_head) >= bot::MIN_SPAWN_DISTANCE {
            break;
        }
        position = random_position(rng);
    }

    let heading = rng.gen_range(0.0..std::f32::consts::TAU);
    let len = nominal_bot_length(player.len(), params);
    Bot {
        body: Serpent::with_length(position, heading, len),
        hue: params.palette[rng.gen_range(0..params.palette.len())],
        threat: params.threat_level,
        speed_mult: params.bot_speed_mult,
        growth_rate: params.bot_growth_rate,
    }
}

/// Bring the bot roster to the active tier's population target
pub fn replenish_bots<R: Rng>(state: &mut GameState, rng: &mut R) {
    let params = state.active_tier.params();
    while state.bots.len() < params.bot_count {
        let b = spawn_bot(rng, &state.player, params);
        state.bots.push(b);
    }
}

/// Rescale the world to a new tier: every surviving bot is rebuilt in place
/// (nominal length regenerated behind its current head along its heading,
/// threat and speed updated), excess bots dropped, shortfall repopulated.
pub fn apply_tier<R: Rng>(state: &mut GameState, rng: &mut R, new_tier: TierId) {
    state.active_tier = new_tier;
    let params = new_tier.params();
    let len = nominal_bot_length(state.player.len(), params);

    for b in &mut state.bots {
        let head = b.body.head();
        let heading = b.body.heading;
        b.body = Serpent::with_length(head, heading, len);
        b.threat = params.threat_level;
        b.speed_mult = params.bot_speed_mult;
        b.growth_rate = params.bot_growth_rate;
    }
    state.bots.truncate(params.bot_count);
    replenish_bots(state, rng);
}

fn random_position<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..world::SIZE),
        rng.gen_range(0.0..world::SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_food_in_bounds() {
        let mut rng = rng();
        for _ in 0..200 {
            let f = spawn_food(&mut rng, TierId::Meadow);
            assert!(f.position.x >= 0.0 && f.position.x < world::SIZE);
            assert!(f.position.y >= 0.0 && f.position.y < world::SIZE);
            assert!(f.radius >= food::MIN_RADIUS && f.radius <= food::MAX_RADIUS);
        }
    }

    #[test]
    fn test_food_hue_from_tier_palette() {
        let mut rng = rng();
        let palette = TierId::Inferno.params().palette;
        for _ in 0..50 {
            let f = spawn_food(&mut rng, TierId::Inferno);
            assert!(palette.contains(&f.hue));
        }
    }

    #[test]
    fn test_replenish_food_reaches_target() {
        let mut state = GameState::new_life();
        let mut rng = rng();
        replenish_food(&mut state, &mut rng, food::POOL_SIZE);
        assert_eq!(state.foods.len(), food::POOL_SIZE);
        // Already full: no change
        replenish_food(&mut state, &mut rng, food::POOL_SIZE);
        assert_eq!(state.foods.len(), food::POOL_SIZE);
    }

    #[test]
    fn test_bot_spawns_away_from_player() {
        let state = GameState::new_life();
        let mut rng = rng();
        for _ in 0..30 {
            let b = spawn_bot(&mut rng, &state.player, TierId::Meadow.params());
            assert!(b.body.head().distance_to(state.player.head()) >= bot::MIN_SPAWN_DISTANCE);
        }
    }

    #[test]
    fn test_nominal_length_tracks_player() {
        let grove = TierId::Grove.params();
        assert_eq!(nominal_bot_length(10, grove), 7);
        assert_eq!(nominal_bot_length(100, grove), 70);
        // Floor keeps tiny players from spawning degenerate bots
        assert_eq!(nominal_bot_length(1, TierId::Meadow.params()), bot::MIN_LENGTH);
    }

    #[test]
    fn test_replenish_bots_to_tier_count() {
        let mut state = GameState::new_life();
        let mut rng = rng();
        replenish_bots(&mut state, &mut rng);
        assert_eq!(state.bots.len(), TierId::Meadow.params().bot_count);
    }

    #[test]
    fn test_apply_tier_rebuilds_every_bot() {
        let mut state = GameState::new_life();
        let mut rng = rng();
        replenish_bots(&mut state, &mut rng);
        state.player = Serpent::with_length(state.player.head(), 0.0, 40);
        let heads: Vec<Vec2> = state.bots.iter().map(|b| b.body.head()).collect();

        apply_tier(&mut state, &mut rng, TierId::Dusk);

        let params = TierId::Dusk.params();
        assert_eq!(state.active_tier, TierId::Dusk);
        assert_eq!(state.bots.len(), params.bot_count);
        let expected_len = nominal_bot_length(40, params);
        for b in &state.bots {
            assert_eq!(b.body.len(), expected_len);
            assert_eq!(b.threat, params.threat_level);
            assert_eq!(b.speed_mult, params.bot_speed_mult);
        }
        // Survivors kept their heads
        for (b, head) in state.bots.iter().zip(heads.iter()) {
            assert_eq!(b.body.head(), *head);
        }
    }

    #[test]
    fn test_apply_tier_truncates_excess() {
        let mut state = GameState::new_life();
        let mut rng = rng();
        state.active_tier = TierId::Inferno;
        replenish_bots(&mut state, &mut rng);
        assert_eq!(state.bots.len(), 12);

        apply_tier(&mut state, &mut rng, TierId::Grove);
        assert_eq!(state.bots.len(), TierId::Grove.params().bot_count);
    }
}
