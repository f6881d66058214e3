use crate::{Ball, Config, Events, GameMap, Paddle, Params, Side};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls only flip direction; the ball may sink in for a tick
        if ball.pos.y <= 0.0 || ball.pos.y + config.ball_size >= map.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            log::trace!("Ball hit wall at y={}", ball.pos.y);
        }

        let mut touching = None;
        for side in [Side::Left, Side::Right] {
            let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
                continue;
            };
            if !overlaps(ball, paddle, config) {
                continue;
            }

            // Only the first tick of contact reflects
            if ball.touching != Some(side) {
                ball.vel = reflect(
                    ball.vel,
                    ball.center(config.ball_size).y,
                    paddle.center_y(config.paddle_height),
                    config.paddle_height,
                    side,
                );
                events.ball_hit_paddle = true;
                log::trace!("Ball reflected off {:?} paddle, vel={}", side, ball.vel);
            }
            touching = Some(side);
        }
        ball.touching = touching;
    }
}

/// Whether the ball box has reached the paddle face and shares vertical extent
pub fn overlaps(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    let vertical = ball.pos.y + config.ball_size >= paddle.y
        && ball.pos.y <= paddle.y + config.paddle_height;
    let horizontal = match paddle.side {
        Side::Left => ball.pos.x <= paddle.x + config.paddle_width,
        Side::Right => ball.pos.x + config.ball_size >= paddle.x,
    };
    vertical && horizontal
}

/// New ball velocity after hitting a paddle.
///
/// The offset of the ball centre from the paddle centre, scaled to [-1, 1],
/// picks an exit angle within ±45° of horizontal. Speed is preserved; the
/// horizontal component always points away from `side`.
pub fn reflect(
    vel: Vec2,
    ball_center_y: f32,
    paddle_center_y: f32,
    paddle_height: f32,
    side: Side,
) -> Vec2 {
    let collide_point = ball_center_y - paddle_center_y;
    let normalized = (collide_point / (paddle_height / 2.0)).clamp(-1.0, 1.0);
    let angle = normalized * Params::MAX_BOUNCE_ANGLE;
    let speed = vel.length();

    Vec2::new(
        speed * angle.cos() * side.exit_dir(),
        speed * angle.sin(),
    )
}
