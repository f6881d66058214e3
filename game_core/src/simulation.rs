use glam::Vec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, ControlMode, Events, GameMap,
    GameRng, InputState, KeyQueue, Paddle, Score, Side, Time,
};

/// All state for one local game, owned by whoever drives the ticks
pub struct Simulation {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub input: InputState,
    pub mode: ControlMode,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl Simulation {
    /// Start a game on the default playfield
    pub fn new(seed: u64) -> Self {
        Self::with_map(GameMap::new(), Config::new(), seed)
    }

    /// Start a game sized to a render surface
    pub fn for_surface(
        width: f32,
        height: f32,
        config: Config,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let map = GameMap::from_surface(width, height, &config)?;
        Ok(Self::with_map(map, config, seed))
    }

    pub fn with_map(map: GameMap, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        for side in [Side::Left, Side::Right] {
            let spawn = map.paddle_spawn(side, &config);
            create_paddle(&mut world, side, spawn.x, spawn.y);
        }

        // Create ball
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(map.ball_spawn(&config), config.ball_speed, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        log::info!(
            "New game on {}x{} playfield, ball velocity {}",
            map.width,
            map.height,
            ball.vel
        );

        Self {
            world,
            time: Time::new(),
            map,
            config,
            input: InputState::new(),
            mode: ControlMode::default(),
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Run one tick, consuming any key transitions queued since the last one
    pub fn update(&mut self, key_queue: &mut KeyQueue) {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.input,
            key_queue,
            &mut self.mode,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Overwrite the ball state, e.g. to set up a scenario
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
            ball.touching = None;
        }
    }

    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}
