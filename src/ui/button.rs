use macroquad::prelude::*;

const IDLE: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const ACTIVE: Color = Color::new(0.18, 0.55, 0.34, 1.0);

/// What a control-panel button asks the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Reset,
    Step,
    Toggle,
    Randomize,
}

impl Action {
    /// Panel order, top to bottom
    pub const ALL: [Action; 4] = [Action::Reset, Action::Step, Action::Toggle, Action::Randomize];

    pub const fn label(self) -> &'static str {
        match self {
            Action::Reset => "Reset",
            Action::Step => "Step Conway",
            Action::Toggle => "Toggle Conway",
            Action::Randomize => "Random",
        }
    }
}

/// A labelled rectangle that reports its action when clicked
#[derive(Clone, Copy, Debug)]
pub struct Button {
    rect: Rect,
    pub action: Action,
}

impl Button {
    pub const fn new(rect: Rect, action: Action) -> Self {
        Self { rect, action }
    }

    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// The action to run if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Action> {
        (is_mouse_button_pressed(MouseButton::Left) && self.contains(mouse_pos)).then_some(self.action)
    }

    /// Draw with hover feedback; `active` marks a latched state (running)
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let fill = match (active, self.contains(mouse_pos)) {
            (true, _) => ACTIVE,
            (false, true) => HOVER,
            (false, false) => IDLE,
        };
        let Rect { x, y, w, h } = self.rect;
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text = self.action.label();
        let size = measure_text(text, None, 20, 1.0);
        draw_text(text, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 20.0, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let button = Button::new(Rect::new(10.0, 20.0, 100.0, 40.0), Action::Step);
        assert!(button.contains((11.0, 21.0)));
        assert!(button.contains((109.0, 59.0)));
        assert!(!button.contains((9.0, 30.0)));
        assert!(!button.contains((50.0, 61.0)));
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<_> = Action::ALL.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }
}
