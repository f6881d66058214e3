use glam::Vec2;

use crate::config::{Config, ConfigError};
use crate::params::Params;
use crate::Side;

/// Playfield bounds, taken from the render surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a playfield from surface dimensions, rejecting ones the paddles
    /// and ball cannot fit in.
    pub fn from_surface(width: f32, height: f32, config: &Config) -> Result<Self, ConfigError> {
        let min_width = 2.0 * config.paddle_width + config.ball_size;
        if !(width >= min_width) {
            return Err(ConfigError::TooNarrow {
                width,
                min: min_width,
            });
        }
        if !(height >= config.paddle_height) {
            return Err(ConfigError::TooShort {
                height,
                min: config.paddle_height,
            });
        }
        Ok(Self { width, height })
    }

    /// Top-left corner that centres the ball
    pub fn ball_spawn(&self, config: &Config) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - config.ball_size / 2.0,
            self.height / 2.0 - config.ball_size / 2.0,
        )
    }

    /// Top-left corner of a paddle at its starting position
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => self.width - config.paddle_width,
        };
        Vec2::new(x, self.height / 2.0 - config.paddle_height / 2.0)
    }

    /// Whether a paddle top edge lies within the playfield
    pub fn paddle_in_bounds(&self, y: f32, config: &Config) -> bool {
        (0.0..=config.paddle_max_y(self.height)).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawns_are_centered() {
        let config = Config::new();
        let map = GameMap::new();
        assert_eq!(map.ball_spawn(&config), Vec2::new(395.0, 195.0));
        assert_eq!(map.paddle_spawn(Side::Left, &config), Vec2::new(0.0, 150.0));
        assert_eq!(
            map.paddle_spawn(Side::Right, &config),
            Vec2::new(790.0, 150.0)
        );
    }

    #[test]
    fn test_from_surface_rejects_tiny_playfields() {
        let config = Config::new();
        assert_eq!(
            GameMap::from_surface(25.0, 400.0, &config),
            Err(ConfigError::TooNarrow {
                width: 25.0,
                min: 30.0
            })
        );
        assert!(matches!(
            GameMap::from_surface(800.0, 99.0, &config),
            Err(ConfigError::TooShort { .. })
        ));
        assert!(GameMap::from_surface(f32::NAN, 400.0, &config).is_err());
        assert_eq!(
            GameMap::from_surface(640.0, 480.0, &config),
            Ok(GameMap {
                width: 640.0,
                height: 480.0
            })
        );
    }

    #[test]
    fn test_paddle_in_bounds() {
        let config = Config::new();
        let map = GameMap::new();
        assert!(map.paddle_in_bounds(0.0, &config));
        assert!(map.paddle_in_bounds(300.0, &config));
        assert!(!map.paddle_in_bounds(-0.5, &config));
        assert!(!map.paddle_in_bounds(300.5, &config));
    }
}
