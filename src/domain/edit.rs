use super::{BoundsError, Cell, CellKind, Grid};

/// Brush state owned by the input layer: what gets painted and whether
/// painting erases instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub kind: CellKind,
    pub delete_mode: bool,
}

impl Brush {
    pub const fn new(kind: CellKind, delete_mode: bool) -> Self {
        Self { kind, delete_mode }
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }

    pub fn toggle_delete(&mut self) {
        self.delete_mode = !self.delete_mode;
    }

    /// Paint this brush onto `grid` at (x, y)
    pub fn apply(&self, grid: &mut Grid, x: usize, y: usize) -> Result<(), BoundsError> {
        grid.paint(x, y, self.kind, self.delete_mode)
    }
}

impl Default for Brush {
    /// Solid blocks first, erase off
    fn default() -> Self {
        Self::new(CellKind::Solid, false)
    }
}

impl Grid {
    /// Apply one paint event. Erasing leaves empty water; painting sets the
    /// kind and adds one full unit on top of whatever the cell held.
    pub fn paint(
        &mut self,
        x: usize,
        y: usize,
        kind: CellKind,
        delete_mode: bool,
    ) -> Result<(), BoundsError> {
        let previous = self.get(x, y)?;
        let cell = if delete_mode {
            Cell::empty(x, y)
        } else {
            Cell::new(kind, previous.fill_level + 1.0, x, y)
        };
        self.set(x, y, cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GravityPhase, Phase};

    #[test]
    fn test_paint_adds_one_unit() {
        let mut grid = Grid::new(10, 10);
        grid.paint(5, 5, CellKind::Water, false).unwrap();
        grid.paint(5, 5, CellKind::Water, false).unwrap();
        assert_eq!(grid.get(5, 5).unwrap().fill_level, 2.0);
    }

    #[test]
    fn test_paint_then_gravity() {
        let mut grid = Grid::new(10, 10);
        let brush = Brush::new(CellKind::Water, false);
        brush.apply(&mut grid, 5, 5).unwrap();
        brush.apply(&mut grid, 5, 5).unwrap();

        let next = GravityPhase.apply(&grid);
        assert!((next.get(5, 5).unwrap().fill_level - 1.0).abs() < 1e-12);
        assert!((next.get(5, 6).unwrap().fill_level - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_erase_resets_to_empty_water() {
        let mut grid = Grid::new(5, 5);
        grid.set(3, 3, Cell::new(CellKind::Solid, 4.0, 3, 3)).unwrap();
        grid.paint(3, 3, CellKind::Solid, true).unwrap();
        assert_eq!(grid.get(3, 3).unwrap(), Cell::empty(3, 3));
    }

    #[test]
    fn test_paint_solid_keeps_counting() {
        let mut grid = Grid::from_fill_rows(&[&[0.5]]);
        grid.paint(0, 0, CellKind::Solid, false).unwrap();
        let cell = grid.get(0, 0).unwrap();
        assert!(cell.is_solid());
        assert_eq!(cell.fill_level, 1.5);
    }

    #[test]
    fn test_paint_out_of_bounds() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.paint(3, 0, CellKind::Water, false).is_err());
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn test_brush_toggles() {
        let mut brush = Brush::default();
        assert_eq!(brush, Brush::new(CellKind::Solid, false));
        brush.toggle_kind();
        brush.toggle_delete();
        assert_eq!(brush, Brush::new(CellKind::Water, true));
    }
}
