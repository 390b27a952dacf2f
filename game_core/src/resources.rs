use crate::Side;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GameRng")
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_reset: Option<Side>, // Wall the ball left through
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.ball_reset = None;
    }

    pub fn is_empty(&self) -> bool {
        !self.ball_hit_wall && self.ball_hit_paddle.is_none() && self.ball_reset.is_none()
    }
}
