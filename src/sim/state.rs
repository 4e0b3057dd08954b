//! Game state and core simulation types
//!
//! All state that must survive a tick lives here, in one owned struct. A
//! `GameState` built from the same seed and config, fed the same inputs,
//! replays the same run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; the state is frozen until a full restart
    GameOver,
}

/// Startup geometry and tuning supplied by the host
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Config {
    /// Viewport size in pixels. Callers must supply positive dimensions
    /// before the first tick.
    pub viewport: Vec2,
    /// Health the player starts with (clamped to at least 1)
    pub max_health: u8,
}

impl Config {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            max_health: START_HEALTH,
        }
    }
}

/// The player avatar. Exactly one per run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner, screen coordinates
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (px/tick, positive is downward)
    pub velocity_y: f32,
    pub health: u8,
    /// A jump is in progress
    pub jumping: bool,
    /// Powered ascent accumulated for the current jump (px)
    pub jump_height: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

/// A collectible power-up
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
}

/// Something the host may want to react to, raised during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An obstacle scrolled off the field; the score is already updated
    ObstacleCleared { score: u64 },
    /// The scroll speed went up at a score milestone
    SpeedIncreased { speed: f32 },
    /// A power-up was picked up; the score is already updated
    PowerUpCollected { score: u64 },
    /// Health hit zero; the state is frozen until a full restart
    GameOver { score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, serialized with the state so replays stay exact
    pub rng: Pcg32,
    pub config: Config,
    pub phase: GamePhase,
    pub score: u64,
    /// Scroll speed (px/tick); never decreases while running
    pub speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Monotonic spawn timers
    pub obstacle_timer: u64,
    pub powerup_timer: u64,
    pub player: Player,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Power-ups in spawn order
    pub power_ups: Vec<PowerUp>,
    /// Consecutive-jump streak. Display only; never multiplies the score.
    pub combo: u32,
    /// Tick at which the most recent jump started
    pub last_jump_tick: Option<u64>,
}

impl GameState {
    /// Create a fresh run from a seed and host-supplied geometry
    pub fn new(seed: u64, config: Config) -> Self {
        let config = Config {
            max_health: config.max_health.max(1),
            ..config
        };
        let viewport = config.viewport;

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Running,
            score: 0,
            speed: START_SPEED,
            time_ticks: 0,
            obstacle_timer: 0,
            powerup_timer: 0,
            player: Player {
                pos: Vec2::new(PLAYER_X, viewport.y - PLAYER_SIZE - PLAYER_FOOT_MARGIN),
                size: Vec2::splat(PLAYER_SIZE),
                velocity_y: 0.0,
                health: config.max_health,
                jumping: false,
                jump_height: 0.0,
            },
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            combo: 0,
            last_jump_tick: None,
        }
    }

    /// The y coordinate the player's top edge rests at when grounded.
    /// The player rides 10 px lower than the entity ground line.
    pub fn ground_y(&self) -> f32 {
        self.config.viewport.y - PLAYER_SIZE - PLAYER_FOOT_MARGIN
    }

    /// Read-only view of this tick's final state for the render collaborator
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: self.player.rect(),
            obstacles: &self.obstacles,
            power_ups: &self.power_ups,
            score: self.score,
            health: self.player.health,
            combo: self.combo,
            game_over: self.phase == GamePhase::GameOver,
        }
    }
}

/// Per-tick view handed to the renderer; the core does not care how (or
/// whether) it gets drawn.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub player: Rect,
    pub obstacles: &'a [Obstacle],
    pub power_ups: &'a [PowerUp],
    pub score: u64,
    pub health: u8,
    pub combo: u32,
    pub game_over: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_grounded() {
        let state = GameState::new(7, Config::new(Vec2::new(800.0, 600.0)));
        assert_eq!(state.player.pos, Vec2::new(50.0, 530.0));
        assert_eq!(state.player.pos.y, state.ground_y());
        assert!(!state.player.jumping);
        assert_eq!(state.player.health, START_HEALTH);
    }

    #[test]
    fn test_health_clamped_to_positive() {
        let config = Config {
            viewport: Vec2::new(800.0, 600.0),
            max_health: 0,
        };
        let state = GameState::new(7, config);
        assert_eq!(state.player.health, 1);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(7, Config::new(Vec2::new(800.0, 600.0)));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.player, state.player.rect());
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.health, START_HEALTH);
        assert!(!snapshot.game_over);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = GameState::new(42, Config::new(Vec2::new(800.0, 600.0)));
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed, state.seed);
        assert_eq!(restored.player.pos, state.player.pos);
        assert_eq!(restored.phase, state.phase);
    }
}
