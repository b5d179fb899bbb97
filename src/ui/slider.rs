use std::ops::RangeInclusive;

use macroquad::prelude::*;

use crate::application::FramerateBounds;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;

/// Horizontal integer slider snapping to `step` notches above `min`
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: u32,
    max: u32,
    step: u32,
    value: u32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, range: RangeInclusive<u32>, step: u32, value: u32) -> Self {
        let (min, max) = range.into_inner();
        let max = max.max(min);
        Self {
            x,
            y,
            width,
            min,
            max,
            step: step.max(1),
            value: value.clamp(min, max),
            dragging: false,
        }
    }

    /// Framerate slider over the scheduler's bounds
    pub fn framerate(x: f32, y: f32, width: f32, bounds: FramerateBounds, value: u32) -> Self {
        Self::new(x, y, width, bounds.min..=bounds.max, bounds.step, value)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Follow a value changed elsewhere
    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Snapped value under screen x
    pub fn value_at(&self, screen_x: f32) -> u32 {
        let (min, max, step) = (self.min, self.max, self.step);
        let t = ((screen_x - self.x) / self.width).clamp(0.0, 1.0);
        let raw = min as f32 + t * (max - min) as f32;
        let notch = ((raw - min as f32) / step as f32).round() as u32;
        (min + notch * step).min(max)
    }

    fn knob_x(&self) -> f32 {
        let (min, max) = (self.min, self.max);
        if max == min {
            return self.x;
        }
        self.x + (self.value - min) as f32 / (max - min) as f32 * self.width
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= KNOB_RADIUS
    }

    /// Handle dragging; returns the new value when it changed this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<u32> {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }
        let value = self.value_at(mouse_pos.0);
        (value != self.value).then(|| {
            self.value = value;
            value
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn draw(&self, label: &str) {
        draw_text(label, self.x, self.y - 14.0, 14.0, GRAY);
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(70, 70, 70, 255),
        );
        let knob_color = if self.dragging {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, knob_color);
        draw_circle_lines(self.knob_x(), self.y, KNOB_RADIUS, 2.0, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> Slider {
        Slider::framerate(100.0, 0.0, 120.0, FramerateBounds::new(1, 121, 15), 1)
    }

    #[test]
    fn test_value_at_ends() {
        let s = slider();
        assert_eq!(s.value_at(0.0), 1);
        assert_eq!(s.value_at(100.0), 1);
        assert_eq!(s.value_at(220.0), 121);
        assert_eq!(s.value_at(999.0), 121);
    }

    #[test]
    fn test_value_at_snaps_to_notch() {
        let s = slider();
        // One pixel per gen/s on this track
        assert_eq!(s.value_at(114.0), 16);
        assert_eq!(s.value_at(107.0), 1);
        assert_eq!(s.value_at(161.0), 61);
    }

    #[test]
    fn test_byte_range() {
        let s = Slider::new(0.0, 0.0, 255.0, 0..=255, 1, 300);
        assert_eq!(s.value(), 255);
        assert_eq!(s.value_at(0.0), 0);
        assert_eq!(s.value_at(127.6), 128);
        assert_eq!(s.value_at(255.0), 255);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut s = slider();
        s.set_value(500);
        assert_eq!(s.value(), 121);
        assert_eq!(s.knob_x(), 220.0);
    }
}
