use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::Side;

/// Simulation clock, counted in ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player 1
    pub right: u32, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    /// Debug adjustment: award `side` a point and take one from the other
    /// side if it has any.
    pub fn shift_point(&mut self, side: Side) {
        let (gain, lose) = match side {
            Side::Left => (&mut self.left, &mut self.right),
            Side::Right => (&mut self.right, &mut self.left),
        };
        *gain += 1;
        if *lose > 0 {
            *lose -= 1;
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player 1: {} | Player 2: {}", self.left, self.right)
    }
}

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

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub score_adjusted: bool,
    pub mode_toggled: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn score_changed(&self) -> bool {
        self.left_scored || self.right_scored || self.score_adjusted
    }
}

/// Who drives the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlMode {
    /// Ball integrates its velocity every tick
    #[default]
    Automatic,
    /// Ball is steered directly by the manual keys
    Manual,
}

impl ControlMode {
    pub fn toggle(&mut self) {
        *self = match self {
            ControlMode::Automatic => ControlMode::Manual,
            ControlMode::Manual => ControlMode::Automatic,
        };
    }

    pub fn is_manual(self) -> bool {
        self == ControlMode::Manual
    }
}

/// Current pressed state of every key seen so far
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: &str, pressed: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = pressed,
            None => {
                self.keys.insert(key.to_owned(), pressed);
            }
        }
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }
}

/// A single key press or release reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTransition {
    pub key: String,
    pub pressed: bool,
}

/// Key transitions waiting to be applied at the start of the next tick
#[derive(Debug, Clone, Default)]
pub struct KeyQueue {
    pending: VecDeque<KeyTransition>,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, pressed: bool) {
        self.pending.push_back(KeyTransition {
            key: key.into(),
            pressed,
        });
    }

    pub fn press(&mut self, key: impl Into<String>) {
        self.push(key, true);
    }

    pub fn release(&mut self, key: impl Into<String>) {
        self.push(key, false);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Take every queued transition in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = KeyTransition> + '_ {
        self.pending.drain(..)
    }
}
