pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Advance the game by one frame
pub fn step(state: &mut GameState, events: &mut Events) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(state);

    // 2. Check collisions (walls, then paddles)
    check_collisions(state, events);

    // 3. Check scoring (ball exited arena)
    check_scoring(state, events);

    // 4. Opponent follows the ball
    track_ball(state);
}

impl GameState {
    /// Advance one frame, discarding the frame's events
    pub fn update(&mut self) {
        step(self, &mut Events::new());
    }

    /// Draw the current frame
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render::render(self, surface);
    }
}
