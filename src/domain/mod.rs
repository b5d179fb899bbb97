mod cell;
mod color;
mod grid;
pub mod rules;

pub use cell::{Cell, DEAD};
pub use color::{Rgb, average};
pub use grid::GridStore;
