use super::{SimConfig, Simulation};
use crate::domain::{Brush, Grid, Pipeline};

/// Ticks per second range reachable with the speed keys
const MIN_SPEED: f32 = 1.0;
const MAX_SPEED: f32 = 120.0;

/// Map a pointer position in pixels to the cell under it.
/// Positions left of or above the grid, or past its far edges, map to nothing.
pub fn screen_to_grid(
    pointer: (f32, f32),
    cell_size: f32,
    dimensions: (usize, usize),
) -> Option<(usize, usize)> {
    let (px, py) = pointer;
    if px < 0.0 || py < 0.0 {
        return None;
    }
    let x = (px / cell_size) as usize;
    let y = (py / cell_size) as usize;
    (x < dimensions.0 && y < dimensions.1).then_some((x, y))
}

/// GameState orchestrates the simulation.
/// It sits between the input/rendering layers and the domain: edits are
/// applied through it between ticks, and it decides when a tick is due.
pub struct GameState {
    pub simulation: Simulation,
    pub brush: Brush,
    pub cell_size: f32,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
    pub last_render_time_ms: f32,
    /// Pointer position of the last paint event while the button is held
    last_paint_pointer: Option<(f32, f32)>,
}

impl GameState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            simulation: Simulation::new(Grid::new(config.columns, config.rows), config.pipeline),
            brush: Brush::default(),
            cell_size: config.cell_size,
            is_running: !config.start_paused,
            update_timer: 0.0,
            updates_per_second: config.ticks_per_second().clamp(MIN_SPEED, MAX_SPEED),
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
            last_paint_pointer: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.simulation.grid()
    }

    pub fn set_pipeline(&mut self, pipeline: Pipeline) {
        self.simulation.set_pipeline(pipeline);
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        log::debug!("simulation {}", if self.is_running { "running" } else { "paused" });
        self
    }

    pub fn toggle_brush_kind(mut self) -> Self {
        self.brush.toggle_kind();
        log::debug!("brush kind: {}", self.brush.kind.name());
        self
    }

    pub fn toggle_delete_mode(mut self) -> Self {
        self.brush.toggle_delete();
        log::debug!("delete mode: {}", self.brush.delete_mode);
        self
    }

    /// Empty the grid and reset the tick counter
    pub fn clear(mut self) -> Self {
        self.simulation.grid_mut().clear();
        self.simulation.reset_ticks();
        log::info!("grid cleared");
        self
    }

    /// Scatter random blocks and water and reset the tick counter
    pub fn randomize(mut self) -> Self {
        self.simulation.grid_mut().randomize(&mut rand::rng());
        self.simulation.reset_ticks();
        log::info!("grid randomized");
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Advance exactly one tick, whether running or not
    pub fn step_once(mut self) -> Self {
        self.run_step();
        self
    }

    /// Feed the pointer state for this frame. A held button paints once per
    /// distinct pointer position, so dragging paints the way motion events
    /// would while a resting pointer does not keep piling up water.
    pub fn paint_at_pointer(&mut self, pointer: (f32, f32), held: bool) {
        if !held {
            self.last_paint_pointer = None;
            return;
        }
        if self.last_paint_pointer == Some(pointer) {
            return;
        }
        self.last_paint_pointer = Some(pointer);

        let dimensions = self.grid().dimensions();
        let Some((x, y)) = screen_to_grid(pointer, self.cell_size, dimensions) else {
            return;
        };
        // screen_to_grid already rejected anything outside the grid
        if let Err(err) = self.brush.apply(self.simulation.grid_mut(), x, y) {
            log::warn!("paint rejected: {}", err);
        }
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.run_step();
            self.update_timer = 0.0;
        }

        self
    }

    fn run_step(&mut self) {
        let start = std::time::Instant::now();
        let mut phase_start = start;
        self.simulation.step_with(|state, phase, grid| {
            log::trace!(
                "{:?} {}: {:.3}ms, volume {:.3}",
                state,
                phase,
                phase_start.elapsed().as_secs_f32() * 1000.0,
                grid.total_volume()
            );
            phase_start = std::time::Instant::now();
        });
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}
