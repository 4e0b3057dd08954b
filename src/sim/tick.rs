//! Per-frame simulation tick
//!
//! One call per rendered frame: timers, spawning, physics, then the
//! collision/scoring pass. Events raised during the tick are handed back so
//! the host can react (HUD flashes, persistence, the game-over overlay)
//! without the core knowing any of that exists.

use super::physics;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input latched by the host since the previous tick. One-shot flags are
/// cleared by the host after each processed tick, so a request takes effect
/// on the next tick boundary at the latest.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump requested (key press or touch)
    pub jump: bool,
}

/// Advance the game by one tick and return the events raised.
///
/// While the phase is `GameOver` this is a no-op: the state stays frozen
/// until the host performs a full restart.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    if input.jump {
        physics::start_jump(state);
    }

    spawn::run_spawners(state);

    let ground_y = state.ground_y();
    physics::integrate(&mut state.player, ground_y);

    scan_obstacles(state, &mut events);
    scan_power_ups(state, &mut events);

    events
}

/// Move every obstacle left, apply contact damage, and retire the ones that
/// scrolled off the field. A hit does not remove the obstacle: an overlap
/// that persists keeps draining health every tick, and the obstacle only
/// leaves the collection once its trailing edge passes the left boundary.
fn scan_obstacles(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = state.player.rect();
    let speed = state.speed;

    let mut hits: u32 = 0;
    let mut cleared: u32 = 0;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.rect.pos.x -= speed;
        if obstacle.rect.intersects(&player) {
            hits += 1;
        }
        if obstacle.rect.off_field_left() {
            cleared += 1;
            return false;
        }
        true
    });

    for _ in 0..cleared {
        state.score += OBSTACLE_SCORE;
        events.push(GameEvent::ObstacleCleared { score: state.score });
        if state.score % SPEED_INCREASE_THRESHOLD == 0 {
            state.speed += SPEED_INCREMENT;
            events.push(GameEvent::SpeedIncreased { speed: state.speed });
            log::info!("speed up to {:.1} at score {}", state.speed, state.score);
        }
    }

    if hits > 0 {
        let damage = hits.min(u32::from(u8::MAX)) as u8;
        state.player.health = state.player.health.saturating_sub(damage);
        if state.player.health == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver { score: state.score });
            log::info!("game over at score {}", state.score);
        }
    }
}

/// Move every power-up left; a pickup removes it immediately and banks the
/// bonus, otherwise it is retired when it leaves the field. Each power-up is
/// removed through exactly one of the two paths.
fn scan_power_ups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    // No pickups once the run has ended this tick; the reported final
    // score stays what the game-over event said it was.
    if state.phase == GamePhase::GameOver {
        return;
    }

    let player = state.player.rect();
    let speed = state.speed;

    let mut collected: u32 = 0;
    state.power_ups.retain_mut(|power_up| {
        power_up.rect.pos.x -= speed;
        if power_up.rect.intersects(&player) {
            collected += 1;
            return false;
        }
        !power_up.rect.off_field_left()
    });

    for _ in 0..collected {
        state.score += POWERUP_SCORE_BONUS;
        events.push(GameEvent::PowerUpCollected { score: state.score });
    }
}
