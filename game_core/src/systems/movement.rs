use crate::GameState;

/// Move ball by one frame of velocity
pub fn move_ball(state: &mut GameState) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = GameState::new(Config::new(), 1).unwrap();
        state.ball.pos = Vec2::new(100.0, 100.0);
        state.ball.vel = Vec2::new(5.0, -3.0);

        move_ball(&mut state);

        assert_eq!(state.ball.pos, Vec2::new(105.0, 97.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, -3.0), "Velocity unchanged");
    }

    #[test]
    fn test_move_ball_leaves_paddles_alone() {
        let mut state = GameState::new(Config::new(), 1).unwrap();
        let (player, opponent) = (state.player, state.opponent);

        move_ball(&mut state);

        assert_eq!(state.player, player);
        assert_eq!(state.opponent, opponent);
    }
}
