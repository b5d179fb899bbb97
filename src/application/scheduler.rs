//! Timed stepping loop.
//!
//! The host feeds elapsed frame time into [`StepScheduler::advance`]; the
//! scheduler keeps a virtual clock and at most one armed timer, and calls
//! back into the caller's step function whenever that timer comes due.

use std::time::Duration;

use crate::config::FramerateConfig;

/// Upper bound on steps fired by a single `advance` call
pub const MAX_CATCH_UP_STEPS: usize = 8;

/// Fastest supported rate; anything above would floor the interval to 0 ms
pub const MAX_FRAMERATE: u32 = 1000;

/// Generations per second, already clamped into its bounds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Framerate(u32);

impl Framerate {
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Delay between steps: floor(1000 / rate) milliseconds
    pub const fn interval(self) -> Duration {
        Duration::from_millis(1000 / self.0 as u64)
    }
}

/// Allowed framerate range plus the slider step between presets
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FramerateBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl FramerateBounds {
    pub fn new(min: u32, max: u32, step: u32) -> Self {
        let min = min.clamp(1, MAX_FRAMERATE);
        Self {
            min,
            max: max.clamp(min, MAX_FRAMERATE),
            step: step.max(1),
        }
    }

    /// Clamp any requested rate into range
    pub fn clamp(&self, rate: u32) -> Framerate {
        Framerate(rate.clamp(self.min, self.max))
    }

    /// Move `steps` slider notches from `current`, snapping onto the preset grid
    pub fn nudge(&self, current: Framerate, steps: i32) -> Framerate {
        let notch = (current.get() - self.min) / self.step;
        let target = (i64::from(notch) + i64::from(steps)).max(0);
        let rate = i64::from(self.min) + target * i64::from(self.step);
        self.clamp(rate.min(i64::from(self.max)) as u32)
    }
}

impl From<&FramerateConfig> for FramerateBounds {
    fn from(config: &FramerateConfig) -> Self {
        Self::new(config.min, config.max, config.step)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct TimerId(u64);

/// An armed timer: fires once the clock reaches `due`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timer {
    pub id: TimerId,
    pub due: Duration,
}

/// StepScheduler decides when generations advance.
/// It owns no cells; every step goes through the caller's callback.
#[derive(Debug)]
pub struct StepScheduler {
    state: RunState,
    bounds: FramerateBounds,
    framerate: Framerate,
    now: Duration,
    pending: Option<Timer>,
    next_timer_id: u64,
}

impl StepScheduler {
    pub fn new(bounds: FramerateBounds, initial: u32) -> Self {
        Self {
            state: RunState::Stopped,
            framerate: bounds.clamp(initial),
            bounds,
            now: Duration::ZERO,
            pending: None,
            next_timer_id: 0,
        }
    }

    pub const fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub const fn framerate(&self) -> Framerate {
        self.framerate
    }

    pub const fn bounds(&self) -> FramerateBounds {
        self.bounds
    }

    pub const fn interval(&self) -> Duration {
        self.framerate.interval()
    }

    /// The armed timer, if any. There is never more than one.
    pub const fn pending_timer(&self) -> Option<Timer> {
        self.pending
    }

    /// Virtual clock
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Stopped -> Running: step once right away, then arm the timer
    pub fn start(&mut self, step: impl FnMut()) {
        if self.is_running() {
            return;
        }
        log::info!("simulation started at {} gen/s", self.framerate.get());
        self.state = RunState::Running;
        self.step_and_rearm(self.now, step);
    }

    /// Running -> Stopped, cancelling the armed timer
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        log::info!("simulation stopped");
        self.state = RunState::Stopped;
        self.cancel();
    }

    pub fn toggle(&mut self, step: impl FnMut()) {
        if self.is_running() {
            self.stop();
        } else {
            self.start(step);
        }
    }

    /// Exactly one step; run state and the armed timer are left alone
    pub fn single_step(&mut self, mut step: impl FnMut()) {
        step();
    }

    /// Retune the cadence. While running, a changed rate drops the stale
    /// timer and runs a step immediately on the new interval; an unchanged
    /// (or clamped-to-unchanged) rate does nothing.
    pub fn set_framerate(&mut self, rate: u32, step: impl FnMut()) {
        let framerate = self.bounds.clamp(rate);
        if framerate == self.framerate {
            return;
        }
        log::debug!("framerate {} -> {} gen/s", self.framerate.get(), framerate.get());
        self.framerate = framerate;
        if self.is_running() {
            self.cancel();
            self.step_and_rearm(self.now, step);
        }
    }

    /// Move the clock forward, firing any timer that comes due.
    /// Returns the number of steps performed.
    pub fn advance(&mut self, elapsed: Duration, mut step: impl FnMut()) -> usize {
        self.now += elapsed;
        let mut fired = 0;
        while let Some(timer) = self.pending {
            if timer.due > self.now {
                break;
            }
            self.pending = None;
            fired += 1;
            if fired >= MAX_CATCH_UP_STEPS {
                // Too far behind: step once more and restart from now
                self.step_and_rearm(self.now, &mut step);
                break;
            }
            self.step_and_rearm(timer.due, &mut step);
        }
        fired
    }

    fn step_and_rearm(&mut self, from: Duration, mut step: impl FnMut()) {
        step();
        // A stop may have landed during the step
        if self.is_running() {
            self.arm(from + self.interval());
        }
    }

    fn arm(&mut self, due: Duration) {
        debug_assert!(self.pending.is_none(), "timer armed twice");
        let id = TimerId(self.next_timer_id);
        self.next_timer_id += 1;
        log::trace!("armed timer {:?} due at {:?}", id, due);
        self.pending = Some(Timer { id, due });
    }

    fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            log::trace!("cancelled timer {:?}", timer.id);
        }
    }
}
