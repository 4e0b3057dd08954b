//! Block Runner - a jump-and-dodge endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `platform`: Browser/native storage abstraction
//! - `highscores`: Best-run record persisted through `platform`

pub mod highscores;
pub mod platform;
pub mod sim;

pub use highscores::HighScore;

/// Game tuning constants
pub mod consts {
    /// Player square edge length (px)
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Player's fixed horizontal position (px from the left field edge)
    pub const PLAYER_X: f32 = 50.0;
    /// Gap between the player's feet and the bottom of the viewport (px)
    pub const PLAYER_FOOT_MARGIN: f32 = 20.0;
    /// Gap between spawned entities and the bottom of the viewport (px)
    pub const GROUND_CLEARANCE: f32 = 30.0;

    /// Downward acceleration applied each tick (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity held during the powered phase of a jump (px/tick)
    pub const JUMP_VELOCITY: f32 = -10.0;
    /// Ceiling for the powered ascent of a single jump (px)
    pub const MAX_JUMP_HEIGHT: f32 = 150.0;
    /// Ascent credited per powered tick (px)
    pub const JUMP_LIFT_STEP: f32 = 10.0;
    /// Two jumps starting within this window count as a streak (ticks)
    pub const COMBO_WINDOW_TICKS: u64 = 90;

    /// Starting scroll speed (px/tick)
    pub const START_SPEED: f32 = 5.0;
    /// Speed bump applied at each score milestone (px/tick)
    pub const SPEED_INCREMENT: f32 = 0.7;
    /// Score milestone that triggers a speed bump
    pub const SPEED_INCREASE_THRESHOLD: u64 = 3;
    /// Health the player starts with
    pub const START_HEALTH: u8 = 3;

    /// Ticks between obstacle spawns
    pub const OBSTACLE_SPAWN_INTERVAL: u64 = 100;
    /// Ticks between power-up spawn rolls
    pub const POWERUP_SPAWN_INTERVAL: u64 = 300;
    /// Chance a power-up actually spawns on an eligible tick
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.2;
    /// Power-up square edge length (px)
    pub const POWERUP_SIZE: f32 = 30.0;

    /// Obstacle width range (px)
    pub const OBSTACLE_MIN_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 60.0;
    /// Obstacle height range (px)
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 70.0;

    /// Score for each obstacle that scrolls off the field
    pub const OBSTACLE_SCORE: u64 = 1;
    /// Score bonus for collecting a power-up
    pub const POWERUP_SCORE_BONUS: u64 = 5;
}
