use macroquad::prelude::*;

use crate::application::Simulation;
use crate::ui::{Action, Button, Layout};

/// Apply a control-panel action to the simulation
pub fn apply_action(sim: &mut Simulation, action: Action) {
    match action {
        Action::Reset => sim.reset(),
        Action::Step => sim.single_step(),
        Action::Toggle => sim.toggle(),
        Action::Randomize => sim.randomize(),
    }
}

/// Handle mouse painting on the canvas. Painting is allowed while running.
pub fn handle_mouse_paint(sim: &mut Simulation, layout: &Layout, mouse_pos: (f32, f32)) {
    let Some((x, y)) = layout.screen_to_cell(mouse_pos) else {
        return;
    };

    if is_mouse_button_down(MouseButton::Left) {
        sim.paint_at(x, y);
    } else if is_mouse_button_down(MouseButton::Right) {
        sim.erase_at(x, y);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(sim: &mut Simulation) {
    type KeyAction = (KeyCode, fn(&mut Simulation));

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, Simulation::toggle),
        (KeyCode::N, Simulation::single_step),
        (KeyCode::C, Simulation::reset),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::Up, |s| s.adjust_framerate(1)),
        (KeyCode::Down, |s| s.adjust_framerate(-1)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(sim));
}

/// Process button clicks
pub fn process_button_clicks(sim: &mut Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter_map(|btn| btn.clicked(mouse_pos))
        .for_each(|action| apply_action(sim, action));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_drive_simulation() {
        let mut sim = Simulation::new(5);
        sim.random_density = 1.0;
        apply_action(&mut sim, Action::Randomize);
        assert_eq!(sim.grid().alive_count(), 25);

        apply_action(&mut sim, Action::Step);
        assert_eq!(sim.generation(), 1);

        apply_action(&mut sim, Action::Toggle);
        assert!(sim.is_running());

        apply_action(&mut sim, Action::Reset);
        assert!(!sim.is_running());
        assert_eq!(sim.grid().alive_count(), 0);
    }
}
