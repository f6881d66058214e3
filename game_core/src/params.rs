/// Game tuning parameters for Pong
///
/// All motion is expressed in playfield units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (used when no surface dimensions are supplied)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0; // Per axis on serve
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Frame cadence for native drivers
    pub const TICK_HZ: u32 = 60;
}
