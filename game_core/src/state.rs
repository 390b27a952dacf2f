use crate::{Arena, Ball, Config, ConfigError, GameRng, Paddle, Side};

/// Everything one game needs between frames
///
/// Owned by whoever drives the loop; `update` and `render` borrow it.
#[derive(Debug)]
pub struct GameState {
    pub config: Config,
    pub arena: Arena,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub rng: GameRng,
}

impl GameState {
    /// Build a fresh game: centred paddles and a centred ball with a random serve
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let arena = Arena::from_config(&config);
        let player = Paddle::new(Side::Left, &config);
        let opponent = Paddle::new(Side::Right, &config);
        let ball = Ball::spawn(&config, &mut rng);

        Ok(Self {
            config,
            arena,
            player,
            opponent,
            ball,
            rng,
        })
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.opponent,
        }
    }

    /// Both paddles, player first
    pub fn paddles(&self) -> [&Paddle; 2] {
        [&self.player, &self.opponent]
    }
}
