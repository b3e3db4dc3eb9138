use macroquad::prelude::*;
use crate::application::GameState;
use crate::ui::grid_area_width;

/// Handle mouse painting on the grid. Dragging with the left button paints
/// the current brush; clicks over the side panel never reach the grid.
pub fn handle_mouse_paint(state: &mut GameState, mouse_pos: (f32, f32)) {
    let held = is_mouse_button_down(MouseButton::Left) && mouse_pos.0 < grid_area_width();
    state.paint_at_pointer(mouse_pos, held);
}

/// Quit on Escape
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, GameState::toggle_brush_kind),
        (KeyCode::Backspace, GameState::toggle_delete_mode),
        (KeyCode::P, GameState::toggle_running),
        (KeyCode::N, GameState::step_once),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, |s| s.adjust_speed(5.0)),
        (KeyCode::Down, |s| s.adjust_speed(-5.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[crate::ui::Button],
    mouse_pos: (f32, f32)
) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => s.step_once(),
                2 => s.clear(),
                3 => s.randomize(),
                _ => s,
            }
        })
}
