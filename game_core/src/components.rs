use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameRng, Params};

/// Which wall a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // Player
    Right, // Opponent
}

/// Paddle - a vertically moving rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed after spawn
    pub y: f32, // Top edge, clamped to arena
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        let color = match side {
            Side::Left => Params::PLAYER_COLOR,
            Side::Right => Params::OPPONENT_COLOR,
        };
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_spawn_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            color,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Ball - stored by its top-left corner like the paddles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,  // Diameter
    pub speed: f32, // Base speed, |vel.x| after a reset
    pub color: &'static str,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            speed,
            color: Params::BALL_COLOR,
        }
    }

    /// Centred ball with a random diagonal serve
    pub fn spawn(config: &Config, rng: &mut GameRng) -> Self {
        let dx = config.ball_speed * random_sign(rng);
        let dy = config.ball_initial_dy * random_sign(rng);
        Self::new(
            config.ball_spawn(),
            Vec2::new(dx, dy),
            config.ball_size,
            config.ball_speed,
        )
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Reset ball to center with random direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();

        let range = config.ball_reset_dy_range;
        let mut dy = if range > 0.0 {
            rng.0.gen_range(-range..range)
        } else {
            0.0
        };
        // Never serve flat
        if dy == 0.0 {
            dy = config.ball_reset_dy_fallback;
        }

        self.vel = Vec2::new(self.speed * random_sign(rng), dy);
    }
}

fn random_sign(rng: &mut GameRng) -> f32 {
    if rng.0.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddles_spawn_centred_at_their_walls() {
        let config = Config::new();
        let player = Paddle::new(Side::Left, &config);
        let opponent = Paddle::new(Side::Right, &config);

        assert_eq!(player.x, 10.0);
        assert_eq!(opponent.x, 775.0);
        assert_eq!(player.y, 200.0);
        assert_eq!(opponent.y, 200.0);
        assert_eq!(player.center_y(), 250.0);
        assert_eq!(player.color, "#00bfff");
        assert_eq!(opponent.color, "#ff5555");
    }

    #[test]
    fn test_ball_spawn_serves_diagonally() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        for _ in 0..32 {
            let ball = Ball::spawn(&config, &mut rng);
            assert_eq!(ball.pos, Vec2::new(392.0, 242.0));
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
            assert_eq!(ball.vel.y.abs(), config.ball_initial_dy);
            assert_eq!(ball.color, "#fff");
        }
    }

    #[test]
    fn test_ball_center_and_radius() {
        let ball = Ball::new(Vec2::new(100.0, 50.0), Vec2::ZERO, 16.0, 5.0);
        assert_eq!(ball.center(), Vec2::new(108.0, 58.0));
        assert_eq!(ball.radius(), 8.0);
    }

    #[test]
    fn test_ball_reset_recentres_and_rerandomises() {
        let config = Config::new();
        let mut rng = GameRng::new(12345);
        let mut ball = Ball::new(Vec2::new(-3.0, 77.0), Vec2::new(-5.0, 4.9), 16.0, 5.0);

        for _ in 0..64 {
            ball.reset(&config, &mut rng);
            assert_eq!(ball.pos, config.ball_spawn());
            assert_eq!(ball.vel.x.abs(), ball.speed);
            assert!((-2.0..=2.0).contains(&ball.vel.y));
            assert_ne!(ball.vel.y, 0.0, "Reset must never serve flat");
        }
    }

    #[test]
    fn test_ball_reset_uses_fallback_when_draw_is_zero() {
        let config = Config {
            ball_reset_dy_range: 0.0,
            ..Config::new()
        };
        let mut rng = GameRng::new(1);
        let mut ball = Ball::spawn(&config, &mut rng);

        ball.reset(&config, &mut rng);

        assert_eq!(ball.vel.y, config.ball_reset_dy_fallback);
    }
}
