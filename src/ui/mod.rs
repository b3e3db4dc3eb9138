mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::screen_width;
use crate::domain::Pipeline;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Dropdown entries, in `Pipeline::all()` order
pub fn pipeline_items() -> Vec<String> {
    Pipeline::all().iter().map(|p| p.name().to_string()).collect()
}

/// Create UI buttons with standard layout, placed at panel x `px`.
/// Order matters: input::process_button_clicks dispatches on the index.
pub fn create_buttons(px: f32, is_running: bool) -> Vec<Button> {
    let play_label = if is_running { "Pause" } else { "Play" };
    vec![
        Button::new(px, 80.0, PANEL_WIDTH, BUTTON_HEIGHT, play_label).with_active(is_running),
        Button::new(px, 124.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step"),
        Button::new(px, 168.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 212.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}

/// Point-in-rectangle test shared by the widgets
pub(crate) fn rect_contains(x: f32, y: f32, w: f32, h: f32, pos: (f32, f32)) -> bool {
    pos.0 >= x && pos.0 <= x + w && pos.1 >= y && pos.1 <= y + h
}

/// Colors shared by the widgets
pub(crate) mod palette {
    use macroquad::prelude::Color;

    pub const IDLE: Color = Color::new(0.20, 0.45, 0.60, 1.0);
    pub const HOVER: Color = Color::new(0.204, 0.765, 0.922, 1.0);
    pub const SELECTED: Color = Color::new(0.15, 0.35, 0.50, 1.0);
    pub const MENU: Color = Color::new(0.12, 0.12, 0.12, 1.0);
    pub const BORDER: Color = Color::new(0.35, 0.35, 0.35, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        assert!(rect_contains(10.0, 10.0, 5.0, 5.0, (10.0, 15.0)));
        assert!(!rect_contains(10.0, 10.0, 5.0, 5.0, (15.1, 12.0)));
    }

    #[test]
    fn test_play_button_reflects_running_state() {
        let running = create_buttons(0.0, true);
        assert_eq!(running.len(), 4);
        assert_eq!(running[0].text(), "Pause");
        assert!(running[0].is_active());

        let paused = create_buttons(0.0, false);
        assert_eq!(paused[0].text(), "Play");
        assert!(!paused[0].is_active());
        assert!(paused[1..].iter().all(|b| !b.is_active()));
    }

    #[test]
    fn test_pipeline_items_follow_pipeline_order() {
        let items = pipeline_items();
        assert_eq!(items.len(), Pipeline::all().len());
        assert_eq!(items[0], Pipeline::Standard.name());
    }
}
