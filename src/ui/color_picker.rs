use macroquad::prelude::*;

use super::Slider;
use crate::domain::{Cell, Rgb};
use crate::rendering::to_color;

const SWATCH_SIZE: f32 = 36.0;
const SWATCH_GAP: f32 = 6.0;
const COLUMNS: usize = 4;
const CHANNEL_SPACING: f32 = 30.0;
const CHANNEL_LABELS: [&str; 3] = ["R", "G", "B"];

/// One pickable brush
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
    Paint(Rgb),
    Eraser,
}

impl Swatch {
    pub const fn cell(self) -> Cell {
        match self {
            Swatch::Paint(color) => Cell::Alive(color),
            Swatch::Eraser => Cell::Dead,
        }
    }
}

/// Brush picker: palette swatches, an eraser, and R/G/B sliders for any
/// other color. `selected == None` means the slider mix is the brush.
#[derive(Clone)]
pub struct ColorPicker {
    x: f32,
    y: f32,
    swatches: Vec<Swatch>,
    selected: Option<usize>,
    channels: [Slider; 3],
}

impl ColorPicker {
    pub fn new(x: f32, y: f32, palette: &[Rgb]) -> Self {
        let swatches: Vec<_> = palette
            .iter()
            .copied()
            .map(Swatch::Paint)
            .chain(std::iter::once(Swatch::Eraser))
            .collect();
        let rows = swatches.len().div_ceil(COLUMNS) as f32;
        let track_x = x + 24.0;
        let track_width = COLUMNS as f32 * (SWATCH_SIZE + SWATCH_GAP) - 48.0;
        let first = palette.first().copied().unwrap_or_default();
        let channels = [0, 1, 2].map(|i| {
            let track_y = y + rows * (SWATCH_SIZE + SWATCH_GAP) + 20.0 + i as f32 * CHANNEL_SPACING;
            Slider::new(track_x, track_y, track_width, 0..=255, 1, u32::from(first.channels()[i]))
        });
        Self {
            x,
            y,
            swatches,
            selected: Some(0),
            channels,
        }
    }

    pub fn selected(&self) -> Swatch {
        match self.selected {
            Some(i) => self.swatches[i],
            None => Swatch::Paint(self.custom_color()),
        }
    }

    /// Color mixed from the channel sliders
    pub fn custom_color(&self) -> Rgb {
        let [r, g, b] = self.channels.each_ref().map(|s| s.value().min(255) as u8);
        Rgb::new(r, g, b)
    }

    /// Move the channel sliders onto `color` without changing the selection
    pub fn set_custom_color(&mut self, color: Rgb) {
        for (slider, value) in self.channels.iter_mut().zip(color.channels()) {
            slider.set_value(u32::from(value));
        }
    }

    pub fn height(&self) -> f32 {
        let rows = self.swatches.len().div_ceil(COLUMNS);
        rows as f32 * (SWATCH_SIZE + SWATCH_GAP) + 20.0 + 3.0 * CHANNEL_SPACING
    }

    pub fn is_dragging(&self) -> bool {
        self.channels.iter().any(Slider::is_dragging)
    }

    fn swatch_origin(&self, i: usize) -> (f32, f32) {
        let (col, row) = (i % COLUMNS, i / COLUMNS);
        (
            self.x + col as f32 * (SWATCH_SIZE + SWATCH_GAP),
            self.y + row as f32 * (SWATCH_SIZE + SWATCH_GAP),
        )
    }

    /// Index of the swatch under the cursor
    pub fn swatch_at(&self, pos: (f32, f32)) -> Option<usize> {
        (0..self.swatches.len()).find(|&i| {
            let (sx, sy) = self.swatch_origin(i);
            pos.0 >= sx && pos.0 <= sx + SWATCH_SIZE && pos.1 >= sy && pos.1 <= sy + SWATCH_SIZE
        })
    }

    /// Select a palette swatch; painting swatches also load the sliders
    pub fn select(&mut self, i: usize) -> Option<Swatch> {
        let swatch = *self.swatches.get(i)?;
        if let Swatch::Paint(color) = swatch {
            self.set_custom_color(color);
        }
        self.selected = Some(i);
        Some(swatch)
    }

    /// Handle clicks and slider drags; returns the new brush when it changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<Swatch> {
        let moved = self
            .channels
            .iter_mut()
            .fold(false, |moved, slider| slider.update(mouse_pos).is_some() || moved);
        if moved {
            self.selected = None;
            return Some(self.selected());
        }
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let i = self.swatch_at(mouse_pos)?;
        self.select(i)
    }

    pub fn draw(&self, dead_color: Rgb) {
        draw_text("Brush Color", self.x, self.y - 6.0, 14.0, GRAY);
        for (i, swatch) in self.swatches.iter().enumerate() {
            let (sx, sy) = self.swatch_origin(i);
            match swatch {
                Swatch::Paint(color) => {
                    draw_rectangle(sx, sy, SWATCH_SIZE, SWATCH_SIZE, to_color(*color));
                }
                Swatch::Eraser => {
                    draw_rectangle(sx, sy, SWATCH_SIZE, SWATCH_SIZE, to_color(dead_color));
                    draw_line(sx, sy + SWATCH_SIZE, sx + SWATCH_SIZE, sy, 2.0, RED);
                }
            }
            let (outline, thickness) = if self.selected == Some(i) {
                (YELLOW, 3.0)
            } else {
                (GRAY, 1.0)
            };
            draw_rectangle_lines(sx, sy, SWATCH_SIZE, SWATCH_SIZE, thickness, outline);
        }

        let custom = self.custom_color();
        for ((slider, label), value) in self.channels.iter().zip(CHANNEL_LABELS).zip(custom.channels()) {
            slider.draw(&format!("{label} {value}"));
        }
        let (px, py) = (self.x, self.y + self.height() - 12.0);
        draw_rectangle(px, py, SWATCH_SIZE, 10.0, to_color(custom));
        let outline = if self.selected.is_none() { YELLOW } else { GRAY };
        draw_rectangle_lines(px, py, SWATCH_SIZE, 10.0, 1.0, outline);
        draw_text(&custom.to_string(), px + SWATCH_SIZE + SWATCH_GAP, py + 10.0, 14.0, GRAY);
    }
}
