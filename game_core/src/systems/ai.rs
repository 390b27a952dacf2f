use crate::GameState;

/// Move the opponent paddle one step toward the ball's vertical centre
///
/// The paddle holds still while its centre is within the dead zone of the
/// ball's centre, and is always clamped back into the arena.
pub fn track_ball(state: &mut GameState) {
    let target = state.ball.center().y;
    let step = state.config.opponent_step;
    let dead_zone = state.config.opponent_dead_zone;
    let paddle = &mut state.opponent;

    let center = paddle.center_y();
    if center < target - dead_zone {
        paddle.y += step;
    } else if center > target + dead_zone {
        paddle.y -= step;
    }

    paddle.y = state.arena.clamp_y(paddle.y, paddle.height);
}
