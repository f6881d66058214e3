use crate::params::Params;
use crate::Side;

/// Errors raised while setting up a game
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Surface cannot fit both paddles and the ball side by side
    #[error("playfield width {width} is too narrow (need at least {min})")]
    TooNarrow { width: f32, min: f32 },

    /// Surface is shorter than a paddle
    #[error("playfield height {height} is too short (need at least {min})")]
    TooShort { height: f32, min: f32 },
}

/// Key identifiers the simulation reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
    pub manual_toggle: String,
    pub ball_up: String,
    pub ball_down: String,
    pub ball_left: String,
    pub ball_right: String,
    pub point_left: String,
    pub point_right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".into(),
            left_down: "s".into(),
            right_up: "ArrowUp".into(),
            right_down: "ArrowDown".into(),
            manual_toggle: "m".into(),
            ball_up: "i".into(),
            ball_down: "k".into(),
            ball_left: "j".into(),
            ball_right: "l".into(),
            point_left: "1".into(),
            point_right: "2".into(),
        }
    }
}

impl KeyBindings {
    /// (up, down) keys for a paddle
    pub fn paddle_keys(&self, side: Side) -> (&str, &str) {
        match side {
            Side::Left => (&self.left_up, &self.left_down),
            Side::Right => (&self.right_up, &self.right_down),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub keys: KeyBindings,
    /// Enables the score adjustment keys
    pub debug_controls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            keys: KeyBindings::default(),
            debug_controls: cfg!(debug_assertions),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_controls(mut self, enabled: bool) -> Self {
        self.debug_controls = enabled;
        self
    }

    /// Highest legal paddle top edge for a playfield of `arena_height`
    pub fn paddle_max_y(&self, arena_height: f32) -> f32 {
        arena_height - self.paddle_height
    }
}
