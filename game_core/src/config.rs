use glam::Vec2;
use thiserror::Error;

use crate::{Params, Side};

/// Reasons a configuration cannot describe a playable arena
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("arena must have positive size, got {width}x{height}")]
    EmptyArena { width: f32, height: f32 },

    #[error("paddle must have positive size, got {width}x{height}")]
    EmptyPaddle { width: f32, height: f32 },

    #[error("paddle height {paddle} does not fit arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("paddles overlap: arena width {arena} is too narrow")]
    PaddlesOverlap { arena: f32 },

    #[error("ball size {size} does not fit the arena")]
    BallTooLarge { size: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("ball reset dy range {range} is too wide to sample")]
    ResetRangeTooWide { range: f32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_initial_dy: f32,
    pub ball_reset_dy_range: f32,
    pub ball_reset_dy_fallback: f32,
    pub opponent_step: f32,
    pub opponent_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_initial_dy: Params::BALL_INITIAL_DY,
            ball_reset_dy_range: Params::BALL_RESET_DY_RANGE,
            ball_reset_dy_fallback: Params::BALL_RESET_DY_FALLBACK,
            opponent_step: Params::OPPONENT_STEP,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on an arena of the given size (usually the canvas size)
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Y position (top edge) of a vertically centred paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner of a centred ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0 - self.ball_size / 2.0,
            self.arena_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Check that the configuration describes a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::EmptyArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::EmptyPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if self.paddle_x(Side::Left) + self.paddle_width > self.paddle_x(Side::Right) {
            return Err(ConfigError::PaddlesOverlap {
                arena: self.arena_width,
            });
        }
        if !(self.ball_size > 0.0)
            || self.ball_size > self.arena_width
            || self.ball_size > self.arena_height
        {
            return Err(ConfigError::BallTooLarge {
                size: self.ball_size,
            });
        }
        for (name, value) in [
            ("ball_speed", self.ball_speed),
            ("opponent_step", self.opponent_step),
            ("ball_reset_dy_fallback", self.ball_reset_dy_fallback),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("paddle_margin", self.paddle_margin),
            ("ball_initial_dy", self.ball_initial_dy),
            ("ball_reset_dy_range", self.ball_reset_dy_range),
            ("opponent_dead_zone", self.opponent_dead_zone),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        // Reset draws dy from [-range, range), whose width must stay finite
        if !(2.0 * self.ball_reset_dy_range).is_finite() {
            return Err(ConfigError::ResetRangeTooWide {
                range: self.ball_reset_dy_range,
            });
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f32); 12] {
        [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("ball_initial_dy", self.ball_initial_dy),
            ("ball_reset_dy_range", self.ball_reset_dy_range),
            ("ball_reset_dy_fallback", self.ball_reset_dy_fallback),
            ("opponent_step", self.opponent_step),
            ("opponent_dead_zone", self.opponent_dead_zone),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 10.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right),
            775.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_config_spawn_positions_are_centred() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 200.0);
        assert_eq!(config.ball_spawn(), Vec2::new(392.0, 242.0));
    }

    #[test]
    fn test_with_arena_keeps_default_tuning() {
        let config = Config::with_arena(640.0, 480.0);
        assert_eq!(config.arena_width, 640.0);
        assert_eq!(config.arena_height, 480.0);
        assert_eq!(config.ball_speed, Params::BALL_SPEED);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_arena() {
        let config = Config::with_arena(0.0, 500.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyArena { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_paddle_taller_than_arena() {
        let config = Config::with_arena(800.0, 80.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_overlapping_paddles() {
        let config = Config::with_arena(40.0, 500.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddlesOverlap { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_speed() {
        let config = Config {
            ball_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "ball_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_dead_zone() {
        let config = Config {
            opponent_dead_zone: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "opponent_dead_zone",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_reset_range() {
        let config = Config {
            ball_reset_dy_range: f32::INFINITY,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "ball_reset_dy_range",
                value: f32::INFINITY
            })
        );
    }

    #[test]
    fn test_validate_rejects_unsampleable_reset_range() {
        let config = Config {
            ball_reset_dy_range: f32::MAX,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ResetRangeTooWide { range: f32::MAX })
        );
    }

    #[test]
    fn test_validate_rejects_every_infinite_field() {
        let base = Config::new();
        for (name, _) in base.fields() {
            let mut config = base.clone();
            match name {
                "arena_width" => config.arena_width = f32::INFINITY,
                "arena_height" => config.arena_height = f32::INFINITY,
                "paddle_width" => config.paddle_width = f32::INFINITY,
                "paddle_height" => config.paddle_height = f32::INFINITY,
                "paddle_margin" => config.paddle_margin = f32::INFINITY,
                "ball_size" => config.ball_size = f32::INFINITY,
                "ball_speed" => config.ball_speed = f32::INFINITY,
                "ball_initial_dy" => config.ball_initial_dy = f32::INFINITY,
                "ball_reset_dy_range" => config.ball_reset_dy_range = f32::INFINITY,
                "ball_reset_dy_fallback" => config.ball_reset_dy_fallback = f32::INFINITY,
                "opponent_step" => config.opponent_step = f32::INFINITY,
                "opponent_dead_zone" => config.opponent_dead_zone = f32::INFINITY,
                other => panic!("unexpected field {other}"),
            }
            assert!(
                matches!(config.validate(), Err(ConfigError::NotFinite { name: n, .. }) if n == name),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::PaddleTooTall {
            paddle: 100.0,
            arena: 80.0,
        };
        assert_eq!(
            err.to_string(),
            "paddle height 100 does not fit arena height 80"
        );
    }
}
