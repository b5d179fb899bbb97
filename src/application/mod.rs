pub mod scheduler;
mod simulation;

pub use scheduler::{Framerate, FramerateBounds, RunState, StepScheduler, Timer, TimerId};
pub use simulation::Simulation;
