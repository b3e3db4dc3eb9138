mod config;
mod game_state;
mod simulation;

pub use config::{ConfigError, SimConfig, DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_TICK_DELAY_MS};
pub use game_state::{GameState, screen_to_grid};
pub use simulation::{ControllerState, Simulation};
