mod cell;
mod edit;
mod error;
mod grid;
mod pipeline;
mod rules;

pub use cell::{Cell, CellKind};
pub use edit::Brush;
pub use error::BoundsError;
pub use grid::Grid;
pub use pipeline::Pipeline;
pub use rules::{GravityPhase, LateralFlowPhase, Phase, PressureReleasePhase, LATERAL_DAMPING};
