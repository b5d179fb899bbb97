mod button;
mod color_picker;
mod slider;

pub use button::{Action, Button};
pub use color_picker::{ColorPicker, Swatch};
pub use slider::Slider;

use macroquad::math::Rect;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const MARGIN: f32 = 10.0;
pub const MIN_WINDOW_HEIGHT: f32 = 720.0;

/// Screen layout: the grid canvas on the left, controls on the right.
/// Fixed at startup since neither grid size nor pixel size can change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub size: usize,
    pub pixel_size: f32,
}

impl Layout {
    pub const fn new(size: usize, pixel_size: f32) -> Self {
        Self { size, pixel_size }
    }

    /// Side of the grid canvas in pixels
    pub fn grid_extent(&self) -> f32 {
        self.size as f32 * self.pixel_size
    }

    /// X position where the panel starts
    pub fn panel_x(&self) -> f32 {
        self.grid_extent() + MARGIN * 2.0
    }

    pub fn window_width(&self) -> f32 {
        self.panel_x() + PANEL_WIDTH + MARGIN
    }

    pub fn window_height(&self) -> f32 {
        (self.grid_extent() + MARGIN * 2.0).max(MIN_WINDOW_HEIGHT)
    }

    /// Map a screen position to grid coordinates, if it lies on the canvas
    pub fn screen_to_cell(&self, pos: (f32, f32)) -> Option<(usize, usize)> {
        let x = ((pos.0 - MARGIN) / self.pixel_size).floor();
        let y = ((pos.1 - MARGIN) / self.pixel_size).floor();
        let range = 0.0..self.size as f32;
        (range.contains(&x) && range.contains(&y)).then(|| (x as usize, y as usize))
    }

    /// Top-left screen corner of cell `index`: (i mod SIZE, i div SIZE) scaled
    pub fn cell_origin(&self, index: usize) -> (f32, f32) {
        let (x, y) = (index % self.size, index / self.size);
        (
            MARGIN + x as f32 * self.pixel_size,
            MARGIN + y as f32 * self.pixel_size,
        )
    }
}

/// Create UI buttons with standard layout
pub fn create_buttons(layout: &Layout) -> Vec<Button> {
    let px = layout.panel_x();
    Action::ALL
        .into_iter()
        .enumerate()
        .map(|(i, action)| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + MARGIN);
            Button::new(Rect::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT), action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell() {
        let layout = Layout::new(75, 10.0);
        assert_eq!(layout.screen_to_cell((MARGIN, MARGIN)), Some((0, 0)));
        assert_eq!(layout.screen_to_cell((MARGIN + 25.0, MARGIN + 749.0)), Some((2, 74)));
        assert_eq!(layout.screen_to_cell((MARGIN - 1.0, 50.0)), None);
        assert_eq!(layout.screen_to_cell((MARGIN + 750.0, 50.0)), None);
    }

    #[test]
    fn test_cell_origin_row_major() {
        let layout = Layout::new(75, 10.0);
        assert_eq!(layout.cell_origin(0), (MARGIN, MARGIN));
        assert_eq!(layout.cell_origin(76), (MARGIN + 10.0, MARGIN + 10.0));
    }

    #[test]
    fn test_buttons_stack_in_panel() {
        let layout = Layout::new(75, 10.0);
        let buttons = create_buttons(&layout);
        assert_eq!(buttons.len(), Action::ALL.len());
        let x = layout.panel_x() + 5.0;
        assert!(buttons[0].contains((x, 25.0)));
        assert!(buttons[1].contains((x, 25.0 + BUTTON_HEIGHT + MARGIN)));
        assert!(!buttons[0].contains((layout.grid_extent() / 2.0, 25.0)));
    }

    #[test]
    fn test_panel_sits_right_of_grid() {
        let layout = Layout::new(75, 10.0);
        assert!(layout.panel_x() > layout.grid_extent());
        assert!(layout.window_width() > layout.panel_x() + PANEL_WIDTH);
        assert_eq!(Layout::new(5, 2.0).window_height(), MIN_WINDOW_HEIGHT);
    }
}
