//! Timer-driven entity spawning
//!
//! Obstacles arrive on a fixed cadence; power-ups roll a fixed chance on a
//! longer one. Sizes come from the run's seeded RNG, so a given seed always
//! produces the same field.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::state::{GameState, Obstacle, PowerUp};
use crate::consts::*;

/// Advance both spawn timers and create whatever entities are due this tick.
/// Never blocks, never fails; entity counts are bounded only by natural
/// removal at the left field edge.
pub fn run_spawners(state: &mut GameState) {
    state.obstacle_timer += 1;
    state.powerup_timer += 1;

    if state.obstacle_timer % OBSTACLE_SPAWN_INTERVAL == 0 {
        spawn_obstacle(state);
    }

    if state.powerup_timer % POWERUP_SPAWN_INTERVAL == 0
        && state.rng.random_bool(POWERUP_SPAWN_CHANCE)
    {
        spawn_power_up(state);
    }
}

/// One obstacle at the right field edge, randomly sized, seated on the ground
fn spawn_obstacle(state: &mut GameState) {
    let width = state.rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH);
    let height = state
        .rng
        .random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
    let viewport = state.config.viewport;

    state.obstacles.push(Obstacle {
        rect: Rect::new(
            Vec2::new(viewport.x, viewport.y - height - GROUND_CLEARANCE),
            Vec2::new(width, height),
        ),
    });
    log::debug!(
        "spawned obstacle {width:.0}x{height:.0} at tick {}",
        state.time_ticks
    );
}

/// Fixed-size power-up square seated on the ground
fn spawn_power_up(state: &mut GameState) {
    let viewport = state.config.viewport;

    state.power_ups.push(PowerUp {
        rect: Rect::new(
            Vec2::new(viewport.x, viewport.y - POWERUP_SIZE - GROUND_CLEARANCE),
            Vec2::splat(POWERUP_SIZE),
        ),
    });
    log::debug!("spawned power-up at tick {}", state.time_ticks);
}
