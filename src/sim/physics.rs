//! Vertical physics: the jump arc and ground landing
//!
//! The ascent is intentionally stepped rather than parabolic: while a jump is
//! powered, the vertical velocity is pinned back to a constant upward value
//! every tick until the accumulated lift hits its ceiling, and only then does
//! gravity take over for the descent.

use super::state::{GamePhase, GameState, Player};
use crate::consts::*;

/// Begin a jump if the player is grounded and the game is running.
///
/// Returns true if a jump actually started.
pub fn start_jump(state: &mut GameState) -> bool {
    if state.player.jumping || state.phase == GamePhase::GameOver {
        return false;
    }

    state.player.jumping = true;
    state.player.velocity_y = JUMP_VELOCITY;

    // Streak bookkeeping: jumps started close together build a combo.
    match state.last_jump_tick {
        Some(prev) if state.time_ticks.saturating_sub(prev) <= COMBO_WINDOW_TICKS => {
            state.combo += 1;
        }
        _ => state.combo = 1,
    }
    state.last_jump_tick = Some(state.time_ticks);

    true
}

/// Advance the player's vertical state by one tick and resolve landing.
///
/// Total function: every in-range state has a defined next state, nothing
/// here can fail.
pub fn integrate(player: &mut Player, ground_y: f32) {
    if player.jumping {
        player.velocity_y += GRAVITY;
        player.pos.y += player.velocity_y;

        // Powered phase: hold the ascent until the lift ceiling is reached
        if player.jump_height < MAX_JUMP_HEIGHT {
            player.velocity_y = JUMP_VELOCITY;
            player.jump_height += JUMP_LIFT_STEP;
        }
    }

    // Landing clamp; position never ends a tick below ground level
    if player.pos.y >= ground_y {
        player.pos.y = ground_y;
        player.velocity_y = 0.0;
        player.jumping = false;
        player.jump_height = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Config;
    use glam::Vec2;

    fn grounded_state() -> GameState {
        GameState::new(1, Config::new(Vec2::new(800.0, 600.0)))
    }

    #[test]
    fn test_jump_arc_rises_then_lands_at_ground() {
        let mut state = grounded_state();
        let ground_y = state.ground_y();
        assert_eq!(ground_y, 530.0);

        assert!(start_jump(&mut state));

        // Ascent: y strictly decreases for at least 10 ticks
        let mut prev_y = state.player.pos.y;
        for _ in 0..10 {
            integrate(&mut state.player, ground_y);
            assert!(state.player.pos.y < prev_y);
            prev_y = state.player.pos.y;
        }

        // Keep integrating until landing; the arc must terminate
        let mut ticks = 10;
        while state.player.jumping {
            integrate(&mut state.player, ground_y);
            ticks += 1;
            assert!(ticks < 1000, "jump never landed");
        }

        assert_eq!(state.player.pos.y, ground_y);
        assert_eq!(state.player.velocity_y, 0.0);
        assert_eq!(state.player.jump_height, 0.0);
    }

    #[test]
    fn test_powered_ascent_respects_ceiling() {
        let mut state = grounded_state();
        let ground_y = state.ground_y();
        start_jump(&mut state);

        let mut min_y = state.player.pos.y;
        while state.player.jumping {
            integrate(&mut state.player, ground_y);
            min_y = min_y.min(state.player.pos.y);
        }

        // Powered lift is capped; the apex cannot run away past the
        // ceiling plus the coasting overshoot
        assert!(ground_y - min_y > MAX_JUMP_HEIGHT);
        assert!(ground_y - min_y < 2.0 * MAX_JUMP_HEIGHT);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut state = grounded_state();
        let ground_y = state.ground_y();

        assert!(start_jump(&mut state));
        integrate(&mut state.player, ground_y);
        assert!(!start_jump(&mut state));
    }

    #[test]
    fn test_no_jump_after_game_over() {
        let mut state = grounded_state();
        state.phase = GamePhase::GameOver;
        assert!(!start_jump(&mut state));
    }

    #[test]
    fn test_combo_builds_and_resets() {
        let mut state = grounded_state();

        start_jump(&mut state);
        assert_eq!(state.combo, 1);

        // Land, then jump again inside the streak window
        state.player.jumping = false;
        state.time_ticks += COMBO_WINDOW_TICKS / 2;
        start_jump(&mut state);
        assert_eq!(state.combo, 2);

        // A long pause resets the streak
        state.player.jumping = false;
        state.time_ticks += COMBO_WINDOW_TICKS + 1;
        start_jump(&mut state);
        assert_eq!(state.combo, 1);
    }

    #[test]
    fn test_grounded_integrate_is_a_no_op() {
        let mut state = grounded_state();
        let ground_y = state.ground_y();
        let before = state.player;

        integrate(&mut state.player, ground_y);
        assert_eq!(state.player.pos, before.pos);
        assert_eq!(state.player.velocity_y, 0.0);
    }
}
