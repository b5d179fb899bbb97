use std::time::Duration;

use crate::config::AppConfig;
use crate::domain::{Cell, GridStore, Rgb, rules};
use crate::error::ConfigError;

use super::scheduler::{Framerate, FramerateBounds, StepScheduler};

/// Simulation orchestrates painting and stepping.
/// This is the application layer the UI talks to.
pub struct Simulation {
    grid: GridStore,
    scheduler: StepScheduler,
    pub brush: Cell,
    pub palette: Vec<Rgb>,
    pub parallel: bool,
    pub random_density: f64,
    generation: u64,
}

/// Run one generation over `grid`
fn evolve(grid: &mut GridStore, parallel: bool, generation: &mut u64) {
    let size = grid.size();
    let rule = |cell, index, cells: &[Cell]| rules::next_color(cell, index, cells, size);
    if parallel {
        grid.transform_all_parallel(rule);
    } else {
        grid.transform_all(rule);
    }
    *generation += 1;
}

impl Simulation {
    /// Create a simulation with a dead `size` x `size` grid and default tuning
    pub fn new(size: usize) -> Self {
        let defaults = AppConfig::default();
        let palette = defaults.brush_palette().unwrap_or_else(|_| vec![Rgb::BLACK]);
        Self {
            grid: GridStore::new(size),
            scheduler: StepScheduler::new(
                FramerateBounds::from(&defaults.framerate),
                defaults.framerate.initial,
            ),
            brush: Cell::Alive(palette[0]),
            palette,
            parallel: defaults.simulation.parallel,
            random_density: defaults.simulation.random_density,
            generation: 0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.brush_palette()?;
        Ok(Self {
            grid: GridStore::new(config.grid.size),
            scheduler: StepScheduler::new(
                FramerateBounds::from(&config.framerate),
                config.framerate.initial,
            ),
            brush: Cell::Alive(palette[0]),
            palette,
            parallel: config.simulation.parallel,
            random_density: config.simulation.random_density,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn scheduler(&self) -> &StepScheduler {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn framerate(&self) -> Framerate {
        self.scheduler.framerate()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_brush(&mut self, color: Rgb) {
        self.brush = Cell::Alive(color);
    }

    /// Paint the brush into one cell; out-of-range indices are ignored
    pub fn paint(&mut self, index: usize) {
        self.grid.paint(index, self.brush);
    }

    pub fn paint_at(&mut self, x: usize, y: usize) {
        self.grid.paint_at(x, y, self.brush);
    }

    pub fn erase_at(&mut self, x: usize, y: usize) {
        self.grid.paint_at(x, y, Cell::Dead);
    }

    pub fn single_step(&mut self) {
        let Self { grid, scheduler, parallel, generation, .. } = self;
        scheduler.single_step(|| evolve(grid, *parallel, generation));
    }

    pub fn toggle(&mut self) {
        let Self { grid, scheduler, parallel, generation, .. } = self;
        scheduler.toggle(|| evolve(grid, *parallel, generation));
    }

    pub fn start(&mut self) {
        let Self { grid, scheduler, parallel, generation, .. } = self;
        scheduler.start(|| evolve(grid, *parallel, generation));
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn set_framerate(&mut self, rate: u32) {
        let Self { grid, scheduler, parallel, generation, .. } = self;
        scheduler.set_framerate(rate, || evolve(grid, *parallel, generation));
    }

    /// Move the framerate by whole slider notches
    pub fn adjust_framerate(&mut self, notches: i32) {
        let bounds = self.scheduler.bounds();
        let rate = bounds.nudge(self.scheduler.framerate(), notches);
        self.set_framerate(rate.get());
    }

    /// Clear the grid and stop any running loop
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.grid.reset();
        self.generation = 0;
        log::info!("grid reset ({}x{})", self.grid.size(), self.grid.size());
    }

    /// Scatter palette colors over the grid
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.randomize(self.random_density, &self.palette, rng);
        self.generation = 0;
        log::info!("grid randomized: {} live cells", self.grid.alive_count());
    }

    /// Feed frame time into the scheduler.
    /// Returns the number of generations performed.
    pub fn tick(&mut self, delta_seconds: f32) -> usize {
        let elapsed = Duration::try_from_secs_f32(delta_seconds).unwrap_or(Duration::ZERO);
        let Self { grid, scheduler, parallel, generation, .. } = self;
        scheduler.advance(elapsed, || evolve(grid, *parallel, generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb = Rgb::new(0, 200, 0);

    fn with_blinker() -> Simulation {
        let mut sim = Simulation::new(6);
        sim.set_brush(GREEN);
        for x in 1..=3 {
            sim.paint_at(x, 2);
        }
        sim
    }

    #[test]
    fn test_new_is_stopped_and_empty() {
        let sim = Simulation::new(10);
        assert!(!sim.is_running());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().alive_count(), 0);
        assert_eq!(sim.framerate().get(), 1);
        assert_eq!(sim.brush, Cell::Alive(Rgb::BLACK));
    }

    #[test]
    fn test_single_step_counts_generation() {
        let mut sim = with_blinker();
        sim.single_step();
        assert_eq!(sim.generation(), 1);
        assert!(!sim.is_running());
        assert_eq!(sim.grid().get(sim.grid().index_of(2, 1)), Some(Cell::Alive(GREEN)));
    }

    #[test]
    fn test_paint_ignores_out_of_range() {
        let mut sim = Simulation::new(4);
        sim.paint(16);
        sim.paint(usize::MAX);
        sim.paint_at(4, 1);
        assert_eq!(sim.grid().alive_count(), 0);
        sim.paint(15);
        assert_eq!(sim.grid().alive_count(), 1);
        sim.erase_at(3, 3);
        assert_eq!(sim.grid().alive_count(), 0);
    }

    #[test]
    fn test_toggle_runs_and_ticks() {
        let mut sim = with_blinker();
        sim.toggle();
        assert!(sim.is_running());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.tick(0.5), 0);
        assert_eq!(sim.tick(0.5), 1);
        assert_eq!(sim.generation(), 2);
        sim.toggle();
        assert_eq!(sim.tick(5.0), 0);
    }

    #[test]
    fn test_reset_stops_and_clears() {
        let mut sim = with_blinker();
        sim.start();
        sim.reset();
        assert!(!sim.is_running());
        assert_eq!(sim.grid().alive_count(), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.scheduler().pending_timer(), None);
        assert_eq!(sim.tick(10.0), 0);
    }

    #[test]
    fn test_adjust_framerate_steps_notches() {
        let mut sim = Simulation::new(3);
        sim.adjust_framerate(1);
        assert_eq!(sim.framerate().get(), 16);
        sim.adjust_framerate(100);
        assert_eq!(sim.framerate().get(), 121);
        sim.adjust_framerate(-100);
        assert_eq!(sim.framerate().get(), 1);
    }

    #[test]
    fn test_tick_tolerates_bad_frame_times() {
        let mut sim = with_blinker();
        sim.start();
        for delta in [f32::INFINITY, f32::NAN, -1.0, f32::MAX] {
            assert_eq!(sim.tick(delta), 0, "{delta}");
        }
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_adjust_at_limit_does_not_step() {
        let mut sim = with_blinker();
        sim.set_framerate(121);
        sim.start();
        let armed = sim.scheduler().pending_timer();
        sim.adjust_framerate(1);
        sim.set_framerate(121);
        sim.set_framerate(500);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.scheduler().pending_timer(), armed);

        sim.stop();
        sim.set_framerate(1);
        sim.start();
        sim.adjust_framerate(-1);
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let mut serial = with_blinker();
        serial.parallel = false;
        let mut parallel = with_blinker();
        parallel.parallel = true;
        for _ in 0..3 {
            serial.single_step();
            parallel.single_step();
        }
        assert_eq!(serial.grid().cells(), parallel.grid().cells());
    }
}
