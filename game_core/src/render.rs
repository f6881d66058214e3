//! Render boundary
//!
//! The simulation never draws directly. Hosts implement [`Surface`] and
//! [`ScoreDisplay`]; [`draw_frame`] only reads state and issues primitives.

use glam::Vec2;

use crate::{Score, Side, Simulation};

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#ffffff`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Axis-aligned rectangle given by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

/// A fixed-size 2D drawing target
pub trait Surface {
    /// Dimensions in playfield units
    fn size(&self) -> (f32, f32);
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Receives the score line whenever it changes
pub trait ScoreDisplay {
    fn set_text(&mut self, text: &str);
}

/// Draw the current paddles and ball
pub fn draw_frame(sim: &Simulation, surface: &mut dyn Surface) {
    surface.clear(Color::BLACK);

    let config = &sim.config;
    let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = sim.paddle(side) {
            surface.fill_rect(
                Rect::new(Vec2::new(paddle.x, paddle.y), paddle_size),
                Color::WHITE,
            );
        }
    }

    if let Some(ball) = sim.ball() {
        surface.fill_rect(
            Rect::new(ball.pos, Vec2::splat(config.ball_size)),
            Color::WHITE,
        );
    }
}

/// Push the formatted score to a display
pub fn show_score(score: &Score, display: &mut dyn ScoreDisplay) {
    display.set_text(&score.to_string());
}
