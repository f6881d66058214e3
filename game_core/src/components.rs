use glam::Vec2;

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction a ball leaves this side's paddle in
    pub fn exit_dir(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed per side
    pub y: f32, // Top edge
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    pub fn center_y(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub vel: Vec2, // Units per tick
    /// Paddle the ball overlapped on the last collision check
    pub touching: Option<Side>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            touching: None,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn center(&self, size: f32) -> Vec2 {
        self.pos + Vec2::splat(size / 2.0)
    }

    /// Reset ball to `spawn` with a fresh diagonal direction.
    ///
    /// Each axis gets its own coin flip, so the new heading has no memory of
    /// how the ball left the field.
    pub fn reset(&mut self, spawn: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        self.pos = spawn;
        self.vel = Vec2::new(sx * speed, sy * speed);
        self.touching = None;
    }
}
