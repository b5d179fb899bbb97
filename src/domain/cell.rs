use super::Rgb;

/// Cell is one grid position: either unpainted or carrying a color.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive(Rgb),
}

/// The unpainted sentinel
pub const DEAD: Cell = Cell::Dead;

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    /// Color of a live cell
    pub const fn color(self) -> Option<Rgb> {
        match self {
            Cell::Alive(color) => Some(color),
            Cell::Dead => None,
        }
    }
}

impl From<Rgb> for Cell {
    fn from(color: Rgb) -> Self {
        Cell::Alive(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness() {
        assert!(!DEAD.is_alive());
        assert!(Cell::Alive(Rgb::BLACK).is_alive());
        // White is a color like any other once painted
        assert!(Cell::from(Rgb::WHITE).is_alive());
    }

    #[test]
    fn test_color() {
        assert_eq!(Cell::Dead.color(), None);
        assert_eq!(Cell::Alive(Rgb::new(1, 2, 3)).color(), Some(Rgb::new(1, 2, 3)));
        assert_eq!(Cell::default(), DEAD);
    }
}
