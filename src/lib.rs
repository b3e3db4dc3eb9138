// Domain layer - Cells, grid, transfer rules
pub mod domain;

// Application layer - Simulation controller, configuration, frame coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Brush, Cell, CellKind, Grid, Phase, Pipeline};
pub use application::{GameState, SimConfig, Simulation};
pub use ui::Button;
