//! Frame driver: one update + render per scheduled tick

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    draw_frame, show_score, Config, ConfigError, KeyQueue, Params, ScoreDisplay, Simulation,
    Surface,
};

/// Key queue shared between input listeners and the driver
pub type SharedKeyQueue = Rc<RefCell<KeyQueue>>;

/// Cloneable flag that keeps a frame loop alive
#[derive(Debug, Clone)]
pub struct RunHandle(Arc<AtomicBool>);

impl RunHandle {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for RunHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Host scheduling primitive: blocks until the next frame is due
pub trait TickSource {
    fn wait_for_next_tick(&mut self);
}

/// Sleeps to hold a fixed tick rate on native hosts
#[derive(Debug)]
pub struct FixedRateTicker {
    period: Duration,
    next: Instant,
}

impl FixedRateTicker {
    pub fn new(hz: u32) -> Self {
        let period = Duration::from_secs(1) / hz.max(1);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for FixedRateTicker {
    fn default() -> Self {
        Self::new(Params::TICK_HZ)
    }
}

impl TickSource for FixedRateTicker {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            // Fell behind; don't try to catch up
            self.next = now + self.period;
        }
    }
}

/// Owns the simulation and its output collaborators
pub struct FrameDriver<S: Surface, D: ScoreDisplay> {
    sim: Simulation,
    surface: S,
    display: D,
    keys: SharedKeyQueue,
    running: RunHandle,
}

impl<S: Surface, D: ScoreDisplay> FrameDriver<S, D> {
    pub fn new(sim: Simulation, surface: S, mut display: D) -> Self {
        show_score(&sim.score, &mut display);
        Self {
            sim,
            surface,
            display,
            keys: SharedKeyQueue::default(),
            running: RunHandle::new(),
        }
    }

    /// Size the playfield from the surface and start a fresh game
    pub fn for_surface(
        surface: S,
        display: D,
        config: Config,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let (width, height) = surface.size();
        let sim = Simulation::for_surface(width, height, config, seed)?;
        Ok(Self::new(sim, surface, display))
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Handle for listeners to push key transitions into
    pub fn key_queue(&self) -> SharedKeyQueue {
        Rc::clone(&self.keys)
    }

    pub fn run_handle(&self) -> RunHandle {
        self.running.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    pub fn stop(&self) {
        self.running.stop();
    }

    /// One update followed by one render
    pub fn frame(&mut self) {
        {
            let mut keys = self.keys.borrow_mut();
            self.sim.update(&mut keys);
        }
        if self.sim.events.score_changed() {
            show_score(&self.sim.score, &mut self.display);
        }
        draw_frame(&self.sim, &mut self.surface);
    }

    /// Drive frames until stopped
    pub fn run<T: TickSource>(&mut self, ticker: &mut T) {
        log::info!("Frame loop started");
        while self.running.is_running() {
            self.frame();
            ticker.wait_for_next_tick();
        }
        log::info!(
            "Frame loop stopped after {} ticks, {}",
            self.sim.time.tick,
            self.sim.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Rect, Score};
    use glam::Vec2;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        fills: usize,
    }

    impl Surface for CountingSurface {
        fn size(&self) -> (f32, f32) {
            (800.0, 400.0)
        }

        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, _rect: Rect, _color: Color) {
            self.fills += 1;
        }
    }

    #[derive(Default)]
    struct TextLog(Vec<String>);

    impl ScoreDisplay for TextLog {
        fn set_text(&mut self, text: &str) {
            self.0.push(text.to_owned());
        }
    }

    /// Stops the loop after a fixed number of ticks
    struct StopAfter {
        remaining: usize,
        handle: RunHandle,
        waits: usize,
    }

    impl TickSource for StopAfter {
        fn wait_for_next_tick(&mut self) {
            self.waits += 1;
            self.remaining -= 1;
            if self.remaining == 0 {
                self.handle.stop();
            }
        }
    }

    fn driver() -> FrameDriver<CountingSurface, TextLog> {
        FrameDriver::for_surface(
            CountingSurface::default(),
            TextLog::default(),
            Config::new(),
            42,
        )
        .unwrap()
    }

    #[test]
    fn test_initial_score_is_shown() {
        let driver = driver();
        assert_eq!(driver.display().0, vec!["Player 1: 0 | Player 2: 0"]);
    }

    #[test]
    fn test_frame_updates_then_renders() {
        let mut driver = driver();
        driver.frame();
        assert_eq!(driver.sim().time.tick, 1);
        assert_eq!(driver.surface().clears, 1);
        assert_eq!(driver.surface().fills, 3);
    }

    #[test]
    fn test_run_stops_on_handle() {
        let mut driver = driver();
        let mut ticker = StopAfter {
            remaining: 5,
            handle: driver.run_handle(),
            waits: 0,
        };

        driver.run(&mut ticker);

        assert!(!driver.is_running());
        assert_eq!(ticker.waits, 5);
        assert_eq!(driver.sim().time.tick, 5);
        assert_eq!(driver.surface().clears, 5);
    }

    #[test]
    fn test_run_returns_immediately_when_already_stopped() {
        let mut driver = driver();
        driver.stop();
        let mut ticker = StopAfter {
            remaining: 1,
            handle: driver.run_handle(),
            waits: 0,
        };

        driver.run(&mut ticker);

        assert_eq!(ticker.waits, 0);
        assert_eq!(driver.sim().time.tick, 0);
    }

    #[test]
    fn test_score_text_pushed_only_on_change() {
        let mut driver = driver();
        driver
            .sim_mut()
            .set_ball(Vec2::new(-1.0, 30.0), Vec2::new(-4.0, 0.0));

        driver.frame();
        driver.frame();

        assert_eq!(
            driver.display().0,
            vec!["Player 1: 0 | Player 2: 0", "Player 1: 0 | Player 2: 1"]
        );
        assert_eq!(driver.sim().score, Score { left: 0, right: 1 });
    }

    #[test]
    fn test_queued_keys_are_drained_each_frame() {
        let mut driver = driver();
        let keys = driver.key_queue();
        keys.borrow_mut().press("w");

        driver.frame();

        assert!(keys.borrow().is_empty());
        assert!(driver.sim().input.is_pressed("w"));
        assert_eq!(driver.sim().paddle(crate::Side::Left).unwrap().y, 144.0);
    }

    #[test]
    fn test_fixed_rate_period() {
        let ticker = FixedRateTicker::new(50);
        assert_eq!(ticker.period(), Duration::from_millis(20));

        let ticker = FixedRateTicker::default();
        assert_eq!(ticker.period(), Duration::from_secs(1) / 60);
    }
}
