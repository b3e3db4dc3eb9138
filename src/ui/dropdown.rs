use macroquad::prelude::*;
use super::{palette, rect_contains};

const ROW_HEIGHT: f32 = 28.0;
const FONT_SIZE: f32 = 15.0;

/// Dropdown selector, used to pick the tick pipeline
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + ROW_HEIGHT * (index as f32 + 1.0)
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        rect_contains(self.x, self.y, self.width, ROW_HEIGHT, mouse_pos)
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        rect_contains(self.x, self.item_y(index), self.width, ROW_HEIGHT, mouse_pos)
    }

    /// Draw the closed box, plus the item list when open
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let color = if self.is_hovered_main(mouse_pos) { palette::HOVER } else { palette::IDLE };
        draw_rectangle(self.x, self.y, self.width, ROW_HEIGHT, color);
        draw_rectangle_lines(self.x, self.y, self.width, ROW_HEIGHT, 2.0, WHITE);
        draw_text(&self.items[self.selected], self.x + 5.0, self.y + 19.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 14.0, self.y + 19.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ROW_HEIGHT;
        draw_rectangle(self.x, self.y + ROW_HEIGHT, self.width, menu_height, palette::MENU);
        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                palette::HOVER
            } else if i == self.selected {
                palette::SELECTED
            } else {
                palette::MENU
            };
            draw_rectangle(self.x, item_y, self.width, ROW_HEIGHT, item_color);
            draw_rectangle_lines(self.x, item_y, self.width, ROW_HEIGHT, 1.0, palette::BORDER);
            draw_text(item, self.x + 5.0, item_y + 19.0, FONT_SIZE, WHITE);
        }
        draw_rectangle_lines(self.x, self.y + ROW_HEIGHT, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }

        // Any other click closes the menu; a click on an item also selects it
        self.is_open = false;
        match (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i)) {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }
}
