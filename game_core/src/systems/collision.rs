use crate::{Ball, Events, GameState, Paddle, Side};

/// Check ball collisions with walls and paddles
pub fn check_collisions(state: &mut GameState, events: &mut Events) {
    // Top/bottom walls flip dy only; position is left as is
    if state.arena.touches_wall(state.ball.pos.y, state.ball.size) {
        state.ball.vel.y = -state.ball.vel.y;
        events.ball_hit_wall = true;
        tracing::trace!(y = state.ball.pos.y, dy = state.ball.vel.y, "ball hit wall");
    }

    for side in [Side::Left, Side::Right] {
        let paddle = *state.paddle(side);
        if bounce_off_paddle(&mut state.ball, &paddle) {
            events.ball_hit_paddle = Some(side);
            tracing::trace!(?side, dy = state.ball.vel.y, "ball hit paddle");
        }
    }
}

/// Send the ball away from `paddle` if they overlap, returns whether it did
///
/// Only the ball's leading edge is tested horizontally: its left edge against
/// the left paddle, its right edge against the right paddle. The new vertical
/// velocity is linear in where the ball struck: `-speed` with the ball's
/// centre level with the top of the paddle, `+speed` level with the bottom,
/// and slightly more on the corners.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let bounds = paddle.bounds();
    let leading_edge = match paddle.side {
        Side::Left => ball.pos.x,
        Side::Right => ball.pos.x + ball.size,
    };

    if !bounds.contains_x(leading_edge) || !bounds.overlaps_y(ball.pos.y, ball.pos.y + ball.size)
    {
        return false;
    }

    ball.vel.x = match paddle.side {
        Side::Left => ball.vel.x.abs(),
        Side::Right => -ball.vel.x.abs(),
    };

    let hit_relative_y = (ball.center().y - bounds.center().y) / bounds.half_height();
    ball.vel.y = ball.speed * hit_relative_y;

    true
}
