use macroquad::prelude::*;
use super::{palette, rect_contains};

const FONT_SIZE: u16 = 18;

/// Panel button. An active button (a mode that is currently on) keeps its
/// highlight and a thicker border even when the pointer is elsewhere.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    active: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        rect_contains(self.x, self.y, self.width, self.height, mouse_pos)
    }

    fn fill_color(&self, hovered: bool) -> Color {
        match (hovered, self.active) {
            (true, _) => palette::HOVER,
            (false, true) => palette::SELECTED,
            (false, false) => palette::IDLE,
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let border = if self.active { 3.0 } else { 1.5 };
        draw_rectangle(self.x, self.y, self.width, self.height, self.fill_color(self.is_hovered(mouse_pos)));
        draw_rectangle_lines(self.x, self.y, self.width, self.height, border, WHITE);

        // Centered label
        let size = measure_text(&self.text, None, FONT_SIZE, 1.0);
        let text_x = self.x + (self.width - size.width) / 2.0;
        let text_y = self.y + (self.height + size.height) / 2.0;
        draw_text(&self.text, text_x, text_y, FONT_SIZE as f32, WHITE);
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos)
    }
}
