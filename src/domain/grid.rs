use rand::Rng;
use rayon::prelude::*;

use super::{Cell, Rgb};

/// GridStore owns the flat, row-major cell array.
/// Generations are built into a fresh array and swapped in whole.
pub struct GridStore {
    size: usize,
    cells: Vec<Cell>,
    revision: u64,
}

impl GridStore {
    /// Create a new `size` x `size` grid with all cells dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
            revision: 0,
        }
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Full current state, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Bumped on every mutation so renderers can tell when to redraw
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Convert 2D coordinates to 1D index
    pub const fn index_of(&self, x: usize, y: usize) -> usize {
        x + y * self.size
    }

    /// Convert 1D index to 2D coordinates
    pub const fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Set one cell. Out-of-range indices are ignored.
    pub fn paint(&mut self, index: usize, cell: Cell) -> bool {
        let Some(slot) = self.cells.get_mut(index) else {
            log::trace!("ignoring paint at {} (grid has {} cells)", index, self.cells.len());
            return false;
        };
        *slot = cell;
        self.revision += 1;
        true
    }

    /// Set the cell at (x, y); coordinates off the grid are ignored
    pub fn paint_at(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if x >= self.size || y >= self.size {
            log::trace!("ignoring paint at ({}, {})", x, y);
            return false;
        }
        self.paint(self.index_of(x, y), cell)
    }

    /// Replace the grid with `f` applied to every cell.
    /// Each call sees the untouched previous generation.
    pub fn transform_all<F>(&mut self, f: F)
    where
        F: Fn(Cell, usize, &[Cell]) -> Cell,
    {
        let next = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| f(cell, i, &self.cells))
            .collect();
        self.swap_in(next);
    }

    /// Parallel `transform_all` using rayon, for large grids
    pub fn transform_all_parallel<F>(&mut self, f: F)
    where
        F: Fn(Cell, usize, &[Cell]) -> Cell + Sync,
    {
        let prev = &self.cells;
        let next = prev
            .par_iter()
            .enumerate()
            .map(|(i, &cell)| f(cell, i, prev))
            .collect();
        self.swap_in(next);
    }

    fn swap_in(&mut self, next: Vec<Cell>) {
        debug_assert_eq!(next.len(), self.cells.len());
        self.cells = next;
        self.revision += 1;
    }

    /// Clear all cells to dead state
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.revision += 1;
    }

    /// Scatter live cells with `density` probability, colored from `palette`
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, palette: &[Rgb], rng: &mut R) {
        if palette.is_empty() {
            return;
        }
        let density = density.clamp(0.0, 1.0);
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::Alive(palette[rng.random_range(0..palette.len())])
            } else {
                Cell::Dead
            };
        });
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::next_color;
    use rand::{SeedableRng, rngs::StdRng};

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn blinker() -> GridStore {
        let mut grid = GridStore::new(5);
        for x in 1..=3 {
            grid.paint_at(x, 2, Cell::Alive(RED));
        }
        grid
    }

    fn step(grid: &mut GridStore) {
        let size = grid.size();
        grid.transform_all(|cell, i, cells| next_color(cell, i, cells, size));
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = GridStore::new(4);
        assert_eq!(grid.len(), 16);
        assert!(grid.cells().iter().all(|c| *c == Cell::Dead));
    }

    #[test]
    fn test_paint_in_range() {
        let mut grid = GridStore::new(3);
        assert!(grid.paint(4, Cell::Alive(RED)));
        assert_eq!(grid.get(4), Some(Cell::Alive(RED)));
        assert_eq!(grid.alive_count(), 1);
        assert_eq!(grid.revision(), 1);
    }

    #[test]
    fn test_paint_out_of_range_is_ignored() {
        let mut grid = GridStore::new(3);
        assert!(!grid.paint(9, Cell::Alive(RED)));
        assert!(!grid.paint_at(3, 0, Cell::Alive(RED)));
        assert!(!grid.paint_at(0, 3, Cell::Alive(RED)));
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.revision(), 0);
        assert_eq!(grid.get(9), None);
    }

    #[test]
    fn test_coordinates() {
        let grid = GridStore::new(7);
        assert_eq!(grid.index_of(3, 2), 17);
        assert_eq!(grid.coords_of(17), (3, 2));
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let mut grid = blinker();
        let before = grid.cells().to_vec();
        grid.transform_all(|cell, _, _| cell);
        assert_eq!(grid.cells(), before.as_slice());
        grid.transform_all_parallel(|cell, _, _| cell);
        assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn test_transform_reads_previous_generation() {
        // Each cell copies its left neighbor. In-place updates would smear
        // index 0 across the whole row.
        let mut grid = GridStore::new(2);
        grid.paint(0, Cell::Alive(RED));
        grid.transform_all(|_, i, cells| if i == 0 { Cell::Dead } else { cells[i - 1] });
        assert_eq!(grid.cells(), &[Cell::Dead, Cell::Alive(RED), Cell::Dead, Cell::Dead]);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = blinker();
        step(&mut grid);
        let vertical: Vec<_> = (1..=3).map(|y| grid.get(grid.index_of(2, y))).collect();
        assert!(vertical.iter().all(|c| *c == Some(Cell::Alive(RED))));
        assert_eq!(grid.alive_count(), 3);
        step(&mut grid);
        assert_eq!(grid.cells(), blinker().cells());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = GridStore::new(32);
        let mut rng = StdRng::seed_from_u64(7);
        serial.randomize(0.4, &[RED, Rgb::BLACK, Rgb::new(0, 0, 255)], &mut rng);
        let mut parallel = GridStore::new(32);
        for (i, &cell) in serial.cells().iter().enumerate() {
            parallel.paint(i, cell);
        }

        for _ in 0..5 {
            step(&mut serial);
            parallel.transform_all_parallel(|cell, i, cells| next_color(cell, i, cells, 32));
        }
        assert_eq!(serial.cells(), parallel.cells());
    }

    #[test]
    fn test_reset() {
        let mut grid = blinker();
        grid.reset();
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.len(), 25);
    }

    #[test]
    fn test_randomize_uses_palette() {
        let palette = [RED, Rgb::new(0, 0, 255)];
        let mut grid = GridStore::new(20);
        grid.randomize(0.5, &palette, &mut StdRng::seed_from_u64(42));
        assert!(grid.alive_count() > 0);
        assert!(grid.cells().iter().filter_map(|c| c.color()).all(|c| palette.contains(&c)));

        grid.randomize(0.0, &palette, &mut StdRng::seed_from_u64(42));
        assert_eq!(grid.alive_count(), 0);
    }
}
