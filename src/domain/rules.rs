//! Colorized B3/S23.
//!
//! Survival keeps a cell's color untouched. A birth takes the channel
//! average of its three live parents.

use super::{Cell, Rgb, color::average};

/// Signed offsets of the eight neighbors, top row first.
///
/// Offsets are plain index arithmetic: at the left and right edges they
/// bleed into the adjacent row, and past the top or bottom they read
/// nothing at all.
pub const fn neighbor_offsets(size: usize) -> [isize; 8] {
    let s = size as isize;
    [-s - 1, -s, -s + 1, -1, 1, s - 1, s, s + 1]
}

/// Look up all eight neighbors in offset order; out of range reads `None`.
pub fn neighbors(index: usize, cells: &[Cell], size: usize) -> [Option<Cell>; 8] {
    neighbor_offsets(size).map(|offset| {
        index
            .checked_add_signed(offset)
            .and_then(|i| cells.get(i).copied())
    })
}

/// Compute the next state of `cells[index]` from the previous generation.
pub fn next_color(current: Cell, index: usize, cells: &[Cell], size: usize) -> Cell {
    let mut parents = [Rgb::BLACK; 8];
    let mut alive = 0;
    for color in neighbors(index, cells, size)
        .into_iter()
        .filter_map(|cell| cell.and_then(Cell::color))
    {
        parents[alive] = color;
        alive += 1;
    }

    match (current, alive) {
        (Cell::Alive(_), 2 | 3) => current,
        (Cell::Dead, 3) => Cell::Alive(average(&parents[..alive])),
        _ => Cell::Dead,
    }
}
