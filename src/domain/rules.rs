use super::Grid;

/// A phase is one full-grid application of a single transfer rule.
/// Phases read a snapshot and return the next one; the input is never
/// touched, so the order cells are visited in cannot leak into the result.
pub trait Phase: Send + Sync {
    /// Name of the phase
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Compute the next snapshot from `grid`
    fn apply(&self, grid: &Grid) -> Grid;
}

/// Share of the level difference moved sideways per tick is 1/LATERAL_DAMPING.
/// Anything larger lets neighbours overshoot each other and oscillate.
pub const LATERAL_DAMPING: f64 = 3.0;

/// Water falls into the cell below while that cell has room
#[derive(Clone, Copy, Debug, Default)]
pub struct GravityPhase;

impl Phase for GravityPhase {
    fn name(&self) -> &'static str {
        "Gravity"
    }

    fn description(&self) -> &'static str {
        "Water falls into free space below"
    }

    fn apply(&self, grid: &Grid) -> Grid {
        let mut next = grid.clone();
        let (columns, rows) = grid.dimensions();

        // Last row has nowhere to fall
        for y in 0..rows.saturating_sub(1) {
            for x in 0..columns {
                let source = grid.cell(x, y);
                let below = grid.cell(x, y + 1);
                if !source.is_water() || !below.is_water() {
                    continue;
                }
                if below.fill_level >= source.fill_level {
                    continue;
                }

                // Everything if it fits, otherwise just enough to top the cell up
                let transfer = below.free_space().min(source.fill_level);
                if transfer > 0.0 {
                    *next.fill_mut(x, y) -= transfer;
                    *next.fill_mut(x, y + 1) += transfer;
                }
            }
        }

        next
    }
}

/// Water that cannot fall any further spreads to its left and right neighbours
#[derive(Clone, Copy, Debug, Default)]
pub struct LateralFlowPhase;

impl LateralFlowPhase {
    /// Water rests when it sits on the floor, on a solid, or on water at
    /// least as full as itself
    fn is_resting(grid: &Grid, x: usize, y: usize) -> bool {
        if y + 1 == grid.rows() {
            return true;
        }
        let below = grid.cell(x, y + 1);
        below.is_solid() || below.fill_level >= grid.cell(x, y).fill_level
    }
}

impl Phase for LateralFlowPhase {
    fn name(&self) -> &'static str {
        "Lateral"
    }

    fn description(&self) -> &'static str {
        "Resting water levels out sideways"
    }

    fn apply(&self, grid: &Grid) -> Grid {
        let mut next = grid.clone();
        let (columns, rows) = grid.dimensions();

        for y in 0..rows {
            for x in 0..columns {
                let source = grid.cell(x, y);
                if !source.is_water() || !Self::is_resting(grid, x, y) {
                    continue;
                }

                // Both sides compare against the pre-phase level, so a cell can
                // give away up to a third of its excess in each direction
                let left = x.checked_sub(1);
                let right = (x + 1 < columns).then_some(x + 1);
                for nx in left.into_iter().chain(right) {
                    let neighbour = grid.cell(nx, y);
                    if !neighbour.is_water() || neighbour.fill_level >= source.fill_level {
                        continue;
                    }
                    let share = (source.fill_level - neighbour.fill_level) / LATERAL_DAMPING;
                    *next.fill_mut(x, y) -= share;
                    *next.fill_mut(nx, y) += share;
                }
            }
        }

        next
    }
}

/// Over-full water pushes its excess into the cell above
#[derive(Clone, Copy, Debug, Default)]
pub struct PressureReleasePhase;

impl Phase for PressureReleasePhase {
    fn name(&self) -> &'static str {
        "Pressure"
    }

    fn description(&self) -> &'static str {
        "Pressurized water releases upward"
    }

    fn apply(&self, grid: &Grid) -> Grid {
        let mut next = grid.clone();
        let (columns, rows) = grid.dimensions();

        for y in 1..rows {
            for x in 0..columns {
                let source = grid.cell(x, y);
                if !source.is_pressurized() {
                    continue;
                }
                let above = grid.cell(x, y - 1);
                if !above.is_water() || above.fill_level >= source.fill_level {
                    continue;
                }

                let transfer = source.fill_level - 1.0;
                *next.fill_mut(x, y) -= transfer;
                *next.fill_mut(x, y - 1) += transfer;
            }
        }

        next
    }
}
