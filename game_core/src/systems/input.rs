use crate::GameState;

/// Centre the player paddle on a pointer's vertical position
///
/// `pointer_y` is relative to the top of the drawing surface. The paddle is
/// clamped into the arena; non-finite positions are ignored.
pub fn apply_pointer(state: &mut GameState, pointer_y: f32) {
    if !pointer_y.is_finite() {
        tracing::warn!(pointer_y, "ignoring non-finite pointer position");
        return;
    }

    let paddle = &mut state.player;
    paddle.y = state.arena.clamp_y(pointer_y - paddle.height / 2.0, paddle.height);
}

impl GameState {
    /// Pointer-move handler for the player paddle
    pub fn on_pointer_move(&mut self, pointer_y: f32) {
        apply_pointer(self, pointer_y);
    }
}
