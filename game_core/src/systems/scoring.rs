use crate::{Events, GameState, Side};

/// Reset the ball once it leaves the arena through a side wall
///
/// No score is kept; leaving the arena only re-serves from the centre.
pub fn check_scoring(state: &mut GameState, events: &mut Events) {
    let x = state.ball.pos.x;
    if !state.arena.is_outside_x(x) {
        return;
    }

    let exited = if x < 0.0 { Side::Left } else { Side::Right };
    state.ball.reset(&state.config, &mut state.rng);
    events.ball_reset = Some(exited);

    tracing::debug!(
        ?exited,
        dx = state.ball.vel.x,
        dy = state.ball.vel.y,
        "ball left the arena, re-serving"
    );
}
