use crate::{Ball, Config, ControlMode, GameMap, InputState, Paddle};
use glam::Vec2;
use hecs::World;

/// Apply paddle movement from held keys.
///
/// A step that would carry the paddle outside the playfield is skipped, never
/// clamped, so the paddle stays put at either edge.
pub fn move_paddles(world: &mut World, input: &InputState, map: &GameMap, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = config.keys.paddle_keys(paddle.side);

        if input.is_pressed(up) {
            let y = paddle.y - config.paddle_speed;
            if map.paddle_in_bounds(y, config) {
                paddle.y = y;
            }
        }
        if input.is_pressed(down) {
            let y = paddle.y + config.paddle_speed;
            if map.paddle_in_bounds(y, config) {
                paddle.y = y;
            }
        }
    }
}

/// Move ball by velocity, or by the manual keys when under manual control
pub fn move_ball(world: &mut World, mode: ControlMode, input: &InputState, config: &Config) {
    let step = match mode {
        ControlMode::Automatic => None,
        ControlMode::Manual => Some(manual_step(input, config)),
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        match step {
            None => ball.pos += ball.vel,
            Some(step) => ball.pos += step,
        }
    }
}

fn manual_step(input: &InputState, config: &Config) -> Vec2 {
    let keys = &config.keys;
    let mut step = Vec2::ZERO;
    if input.is_pressed(&keys.ball_up) {
        step.y -= config.paddle_speed;
    }
    if input.is_pressed(&keys.ball_down) {
        step.y += config.paddle_speed;
    }
    if input.is_pressed(&keys.ball_left) {
        step.x -= config.paddle_speed;
    }
    if input.is_pressed(&keys.ball_right) {
        step.x += config.paddle_speed;
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_paddles_follow_their_own_keys() {
        let mut world = World::new();
        let map = GameMap::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 0.0, 150.0);
        create_paddle(&mut world, Side::Right, 790.0, 150.0);

        let mut input = InputState::new();
        input.set_key("w", true);
        input.set_key("ArrowDown", true);
        move_paddles(&mut world, &input, &map, &config);

        assert_eq!(paddle_y(&world, Side::Left), 144.0);
        assert_eq!(paddle_y(&world, Side::Right), 156.0);
    }

    #[test]
    fn test_paddle_skips_move_past_top() {
        let mut world = World::new();
        let map = GameMap::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 0.0, 4.0);

        let mut input = InputState::new();
        input.set_key("w", true);
        move_paddles(&mut world, &input, &map, &config);

        assert_eq!(paddle_y(&world, Side::Left), 4.0, "Move should be skipped");
    }

    #[test]
    fn test_paddle_reaches_bottom_exactly() {
        let mut world = World::new();
        let map = GameMap::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Right, 790.0, 150.0);

        let mut input = InputState::new();
        input.set_key("ArrowDown", true);
        for _ in 0..100 {
            move_paddles(&mut world, &input, &map, &config);
        }

        assert_eq!(paddle_y(&world, Side::Right), 300.0);
    }

    #[test]
    fn test_ball_integrates_velocity_in_automatic_mode() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(4.0, -4.0));

        move_ball(&mut world, ControlMode::Automatic, &InputState::new(), &config);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(104.0, 96.0));
        }
    }

    #[test]
    fn test_ball_follows_keys_in_manual_mode() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(4.0, -4.0));

        let mut input = InputState::new();
        input.set_key("l", true);
        input.set_key("k", true);
        move_ball(&mut world, ControlMode::Manual, &input, &config);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(106.0, 106.0));
            assert_eq!(ball.vel, Vec2::new(4.0, -4.0), "Velocity is retained");
        }
    }
}
