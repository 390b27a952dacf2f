//! Drawing the game onto a 2D surface
//!
//! `render` only reads the state. Anything that can clear, fill rectangles,
//! fill circles and stroke dashed lines can host the game: the browser canvas
//! in `client_wasm`, or a [`CommandBuffer`] in tests.

use glam::Vec2;

use crate::{GameState, Params};

/// Minimal 2D drawing context
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);

    /// Stroke a line with an on/off dash pattern; the pattern does not persist
    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], color: &str);
}

/// Draw one frame: clear, net, paddles, ball
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let arena = state.arena;
    surface.clear_rect(0.0, 0.0, arena.width, arena.height);

    let net_x = arena.center_x();
    surface.stroke_dashed_line(
        Vec2::new(net_x, 0.0),
        Vec2::new(net_x, arena.height),
        &Params::NET_DASH,
        Params::NET_COLOR,
    );

    for paddle in state.paddles() {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, paddle.color);
    }

    let ball = &state.ball;
    surface.fill_circle(ball.center(), ball.radius(), ball.color);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: Vec<f32>,
        color: String,
    },
}

/// Surface that records calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for CommandBuffer {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: color.to_owned(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_owned(),
        });
    }

    fn stroke_dashed_line(&mut self, from: Vec2, to: Vec2, dash: &[f32], color: &str) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash: dash.to_vec(),
            color: color.to_owned(),
        });
    }
}
