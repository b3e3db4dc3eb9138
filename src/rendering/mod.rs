use macroquad::prelude::*;
use crate::domain::{Cell, CellKind, Grid};
use crate::application::GameState;
use crate::ui::{Button, Dropdown, panel_x, PANEL_WIDTH};

const WATER_COLOR: Color = Color::new(0.204, 0.765, 0.922, 1.0);
const SOLID_COLOR: Color = WHITE;
const BACKGROUND_COLOR: Color = BLACK;
const GRID_LINE_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const GRID_LINE_WIDTH: f32 = 2.0;

/// Pixel height of the water column drawn in a cell. Over-full cells draw
/// as full.
pub fn water_height(fill_level: f64, cell_size: f32) -> f32 {
    fill_level.clamp(0.0, 1.0) as f32 * cell_size
}

/// Draw one cell: background, then the water column anchored at the
/// bottom or the whole square for a solid
fn draw_cell(cell: &Cell, cell_size: f32) {
    let px = cell.x as f32 * cell_size;
    let py = cell.y as f32 * cell_size;

    draw_rectangle(px, py, cell_size, cell_size, BACKGROUND_COLOR);
    match cell.kind {
        CellKind::Water => {
            let height = water_height(cell.fill_level, cell_size);
            if height > 0.0 {
                draw_rectangle(px, py + cell_size - height, cell_size, height, WATER_COLOR);
            }
        }
        CellKind::Solid => draw_rectangle(px, py, cell_size, cell_size, SOLID_COLOR),
    }
}

/// Draw every cell followed by the grid lines on top
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    grid.iter_cells().for_each(|cell| draw_cell(cell, cell_size));

    let (columns, rows) = grid.dimensions();
    let width = columns as f32 * cell_size;
    let height = rows as f32 * cell_size;
    for x in 0..columns {
        draw_rectangle(x as f32 * cell_size, 0.0, GRID_LINE_WIDTH, height, GRID_LINE_COLOR);
    }
    for y in 0..rows {
        draw_rectangle(0.0, y as f32 * cell_size, width, GRID_LINE_WIDTH, GRID_LINE_COLOR);
    }
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, dropdown, and status
pub fn draw_controls(
    state: &GameState,
    buttons: &[Button],
    dropdown: &Dropdown,
    mouse_pos: (f32, f32)
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    let controls = [
        ("Controls:", 275.0, 14.0, WHITE),
        ("LMB drag: Paint", 290.0, 12.0, GRAY),
        ("Space: Water/Solid", 303.0, 12.0, GRAY),
        ("Backspace: Erase mode", 316.0, 12.0, GRAY),
        ("P: Play  N: Step", 329.0, 12.0, GRAY),
        ("C: Clear  R: Random", 342.0, 12.0, GRAY),
        ("Up/Down: Speed", 355.0, 12.0, GRAY),
        ("Esc: Quit", 368.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });

    let brush = &state.brush;
    let (brush_text, brush_color) = if brush.delete_mode {
        ("Erase".to_string(), Color::from_rgba(255, 120, 120, 255))
    } else {
        let color = match brush.kind {
            CellKind::Water => WATER_COLOR,
            CellKind::Solid => SOLID_COLOR,
        };
        (brush.kind.name().to_string(), color)
    };

    let grid = state.grid();
    let (columns, rows) = grid.dimensions();
    let status = if state.is_running { "Running" } else { "Paused" };
    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        ("Brush:".to_string(), 400.0, 16.0, WHITE),
        (brush_text, 420.0, 18.0, brush_color),
        (format!("Grid: {}x{}", columns, rows), 450.0, 13.0, GRAY),
        (format!("Volume: {:.2}", grid.total_volume()), 466.0, 13.0, GRAY),
        (format!("Step: {:.2}ms", state.last_step_time_ms), 482.0, 13.0, GRAY),
        (format!("Render: {:.2}ms", state.last_render_time_ms), 498.0, 13.0, GRAY),
        (format!("Speed: {:.0} ticks/s", state.updates_per_second), 514.0, 13.0, GRAY),
        ("Ticks:".to_string(), 545.0, 16.0, WHITE),
        (format!("{}", state.simulation.ticks()), 565.0, 20.0, WATER_COLOR),
        (status.to_string(), 590.0, 16.0, status_color),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });

    // Last so an open menu covers the labels
    dropdown.draw(mouse_pos);
}
