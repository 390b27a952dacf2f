use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_height(&self) -> f32 {
        (self.max.y - self.min.y) * 0.5
    }

    /// Inclusive test on the horizontal extent
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.max.x
    }

    /// Inclusive overlap test between the vertical extent and `[top, bottom]`
    pub fn overlaps_y(&self, top: f32, bottom: f32) -> bool {
        bottom >= self.min.y && top <= self.max.y
    }
}

/// The fixed playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// A vertical span `[top, top + extent]` touches the top or bottom wall
    pub fn touches_wall(&self, top: f32, extent: f32) -> bool {
        top <= 0.0 || top + extent >= self.height
    }

    /// Horizontal position is past either side wall
    pub fn is_outside_x(&self, x: f32) -> bool {
        x < 0.0 || x > self.width
    }

    /// Clamp the top edge of something `extent` tall so it stays inside
    pub fn clamp_y(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, (self.height - extent).max(0.0))
    }
}
