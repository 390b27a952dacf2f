/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side wall
    pub const PLAYER_COLOR: &'static str = "#00bfff";
    pub const OPPONENT_COLOR: &'static str = "#ff5555";

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 5.0; // pixels per frame
    pub const BALL_INITIAL_DY: f32 = 3.0;
    pub const BALL_RESET_DY_RANGE: f32 = 2.0; // dy drawn from [-range, range)
    pub const BALL_RESET_DY_FALLBACK: f32 = 2.0;
    pub const BALL_COLOR: &'static str = "#fff";

    // Opponent
    pub const OPPONENT_STEP: f32 = 4.0; // pixels per frame
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;

    // Net
    pub const NET_COLOR: &'static str = "#444";
    pub const NET_DASH: [f32; 2] = [6.0, 8.0];
}
