//! Pipeline enum for selecting which phases make up a tick.
//!
//! Gravity always runs first: lateral flow only moves water that has
//! stopped falling, and that depends on the post-gravity state.

use super::{GravityPhase, LateralFlowPhase, Phase, PressureReleasePhase};

/// Ordered phase lists a tick can run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pipeline {
    /// Gravity then lateral flow
    #[default]
    Standard,
    /// Gravity, lateral flow, then pressure release
    WithPressure,
}

impl Pipeline {
    /// Get all available pipelines
    pub fn all() -> Vec<Pipeline> {
        vec![Pipeline::Standard, Pipeline::WithPressure]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Pipeline::Standard => "Gravity+Lateral",
            Pipeline::WithPressure => "Grav+Lat+Pressure",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pipeline::Standard => "Falling and levelling only",
            Pipeline::WithPressure => "Over-full cells also push water up",
        }
    }

    /// Build the phases in execution order
    pub fn phases(&self) -> Vec<Box<dyn Phase>> {
        let mut phases: Vec<Box<dyn Phase>> = vec![Box::new(GravityPhase), Box::new(LateralFlowPhase)];
        if *self == Pipeline::WithPressure {
            phases.push(Box::new(PressureReleasePhase));
        }
        phases
    }
}
