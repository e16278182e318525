/// World constants - square toroidal arena, coordinates wrap at the edges
pub mod world {
    /// Side length of the square world in world units
    pub const SIZE: f32 = 2000.0;
    /// Simulation tick rate in Hz (render frames above this rate are skipped)
    pub const TICK_RATE: u32 = 60;
    /// Tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 1000 / TICK_RATE as u64;
}

/// Serpent body constants (shared by player and bots)
pub mod serpent {
    /// Segment diameter in world units
    pub const SEGMENT_SIZE: f32 = 14.0;
    /// Base travel distance per tick before tier multipliers
    pub const BASE_SPEED: f32 = 2.2;
    /// Segment count at life start
    pub const INITIAL_LENGTH: usize = 10;
    /// Fraction of the heading error corrected per tick (curved turning)
    pub const HEADING_BLEND: f32 = 0.12;
    /// Segments adjacent to the head exempt from self-collision checks
    pub const SELF_COLLISION_EXEMPT: usize = 5;
    /// Self-collision distance as a fraction of the segment diameter
    pub const SELF_COLLISION_SCALE: f32 = 0.8;
    /// Radius gained per body segment: radius = SEGMENT_SIZE/2 + len * this
    pub const RADIUS_PER_SEGMENT: f32 = 0.25;
}

/// Food pool constants
pub mod food {
    /// Live particle count, kept constant by same-tick replenishment
    pub const POOL_SIZE: usize = 180;
    /// Minimum particle radius
    pub const MIN_RADIUS: f32 = 6.0;
    /// Maximum particle radius
    pub const MAX_RADIUS: f32 = 20.0;
    /// Eat threshold as a fraction of the combined radii
    pub const EAT_SCALE: f32 = 0.85;
    /// Chance a spawned particle is special
    pub const SPECIAL_CHANCE: f64 = 0.08;
    /// Score for a normal particle
    pub const NORMAL_SCORE: u32 = 1;
    /// Score for a special particle
    pub const SPECIAL_SCORE: u32 = 5;
    /// Extra growth granted by a special particle on top of the size-based amount
    pub const SPECIAL_GROWTH_BONUS: u32 = 6;
}

/// Bot behavior constants
pub mod bot {
    /// Bot speed as a fraction of the player base speed (keeps the game winnable)
    pub const SPEED_FACTOR: f32 = 0.4;
    /// Player detection radius at threat level 0
    pub const DETECTION_BASE: f32 = 120.0;
    /// Additional detection radius per threat level
    pub const DETECTION_PER_THREAT: f32 = 60.0;
    /// Pursuit turn rate at threat level 0
    pub const TURN_BASE: f32 = 0.04;
    /// Additional turn rate per threat level
    pub const TURN_PER_THREAT: f32 = 0.02;
    /// Per-tick chance of a wander heading perturbation outside detection range
    pub const WANDER_CHANCE: f64 = 0.02;
    /// Maximum wander perturbation in radians (either direction)
    pub const WANDER_MAX_TURN: f32 = 0.8;
    /// Ticks between bot growth rolls
    pub const GROWTH_INTERVAL_TICKS: u64 = 90;
    /// Minimum spawn distance from the player head
    pub const MIN_SPAWN_DISTANCE: f32 = 300.0;
    /// Maximum attempts to find a spawn position away from the player
    pub const MAX_SPAWN_ATTEMPTS: u32 = 20;
    /// Bots never shrink below this many segments
    pub const MIN_LENGTH: usize = 4;
}

/// Input target tracking constants
pub mod input {
    /// Target updates moving less than this are ignored (anti-jitter)
    pub const MIN_MOVE: f32 = 4.0;
    /// Ticks without a meaningful target move before the target counts as idle
    pub const IDLE_TIMEOUT_TICKS: u64 = 90;
    /// Stop radius multiplier while the target is idle (coast to a stop)
    pub const COAST_STOP_FACTOR: f32 = 3.0;
}

/// Collision radius for a serpent of `len` segments
#[inline]
pub fn radius_for_length(len: usize) -> f32 {
    serpent::SEGMENT_SIZE / 2.0 + len as f32 * serpent::RADIUS_PER_SEGMENT
}

/// Growth granted by eating a particle of radius `r`
#[inline]
pub fn growth_for_radius(r: f32) -> u32 {
    ((r / 2.0).round() as u32).max(2)
}
