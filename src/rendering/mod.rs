use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{Cell, GridStore, Rgb};
use crate::ui::{Action, Button, ColorPicker, Layout, MARGIN, Slider};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Paints grid state onto the canvas.
///
/// Cells are written one texel each into an image that is scaled up by
/// the pixel size when drawn. The image is only rebuilt when the grid's
/// revision moves.
pub struct GridRenderer {
    image: Image,
    texture: Texture2D,
    dead_color: Color,
    drawn_revision: Option<u64>,
}

impl GridRenderer {
    pub fn new(size: usize, dead_color: Rgb) -> Self {
        let side = size as u16;
        let dead_color = to_color(dead_color);
        let image = Image::gen_image_color(side, side, dead_color);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Self {
            image,
            texture,
            dead_color,
            drawn_revision: None,
        }
    }

    fn refresh(&mut self, grid: &GridStore) {
        if self.drawn_revision == Some(grid.revision()) {
            return;
        }
        for (i, cell) in grid.cells().iter().enumerate() {
            let (x, y) = grid.coords_of(i);
            let color = match cell {
                Cell::Alive(rgb) => to_color(*rgb),
                Cell::Dead => self.dead_color,
            };
            self.image.set_pixel(x as u32, y as u32, color);
        }
        self.texture.update(&self.image);
        self.drawn_revision = Some(grid.revision());
    }

    pub fn draw(&mut self, grid: &GridStore, layout: &Layout) {
        self.refresh(grid);
        let extent = layout.grid_extent();
        let (x, y) = layout.cell_origin(0);
        draw_texture_ex(
            &self.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(extent, extent)),
                ..Default::default()
            },
        );
        draw_rectangle_lines(x - 1.0, y - 1.0, extent + 2.0, extent + 2.0, 1.0, RED);
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, picker, slider and status
pub fn draw_controls(
    sim: &Simulation,
    layout: &Layout,
    buttons: &[Button],
    picker: &ColorPicker,
    slider: &Slider,
    dead_color: Rgb,
    mouse_pos: (f32, f32),
) {
    let px = layout.panel_x();
    draw_rectangle(
        px - MARGIN / 2.0,
        0.0,
        screen_width() - px + MARGIN / 2.0,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    let running = sim.is_running();
    buttons
        .iter()
        .for_each(|btn| btn.draw(mouse_pos, running && btn.action == Action::Toggle));
    picker.draw(dead_color);
    slider.draw(&format!("Framerate: {} gen/s", sim.framerate().get()));

    let status_y = screen_height() - 130.0;
    let generation = sim.generation().to_string();
    let alive = format!("Alive: {}", sim.grid().alive_count());
    let labels = [
        ("Generation:", status_y, 16.0, WHITE),
        (generation.as_str(), status_y + 20.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        (
            alive.as_str(),
            status_y + 42.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        (
            if running { "Running" } else { "Paused" },
            status_y + 64.0,
            16.0,
            if running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        ("LMB paint, RMB erase", status_y + 90.0, 12.0, GRAY),
        ("Space run, N step, C clear", status_y + 104.0, 12.0, GRAY),
        ("R random, Up/Down speed", status_y + 118.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });
}
