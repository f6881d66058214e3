pub mod components;
pub mod config;
pub mod driver;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one tick
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    input: &mut InputState,
    key_queue: &mut KeyQueue,
    mode: &mut ControlMode,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Drain key transitions into the input state
    ingest_keys(key_queue, input, mode, score, config, events);

    // 2. Move paddles from held keys
    move_paddles(world, input, map, config);

    // 3. Move ball (velocity or manual keys)
    move_ball(world, *mode, input, config);

    // 4. Check collisions (walls, paddles)
    check_collisions(world, map, config, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, map, score, events, rng, config);

    time.advance();
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, x, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
