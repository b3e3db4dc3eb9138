use super::{BoundsError, Cell};
use rand::Rng;

/// Grid owns every cell of the simulation in a single row-major buffer.
/// Phases never mutate a grid they read from; they build a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `width` columns by `height` rows, all empty water
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::empty(x, y)))
            .collect();
        Self { width, height, cells }
    }

    /// Build a grid from per-row fill levels, every cell water.
    /// Rows are listed top to bottom and must all have the same length.
    #[cfg(test)]
    pub(crate) fn from_fill_rows(rows: &[&[f64]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(rows.iter().all(|row| row.len() == width), "ragged rows");

        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &fill) in row.iter().enumerate() {
                let idx = grid.get_index(x, y);
                grid.cells[idx].fill_level = fill;
            }
        }
        grid
    }

    /// Grid dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn rows(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    pub(crate) const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize, BoundsError> {
        if self.contains(x, y) {
            Ok(self.get_index(x, y))
        } else {
            Err(BoundsError::OutOfRange {
                x,
                y,
                columns: self.width,
                rows: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoundsError> {
        self.check_bounds(x, y).map(|idx| self.cells[idx])
    }

    /// Store a cell at position. The cell's coordinates are rewritten to
    /// match the slot it lands in.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), BoundsError> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = Cell { x, y, ..cell };
        Ok(())
    }

    /// Unchecked access for the rule engine, which only walks valid indices
    pub(crate) fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.get_index(x, y)]
    }

    pub(crate) fn fill_mut(&mut self, x: usize, y: usize) -> &mut f64 {
        let idx = self.get_index(x, y);
        &mut self.cells[idx].fill_level
    }

    /// Row-major traversal of every cell. Calling again restarts it.
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Total volume held by water cells
    pub fn total_volume(&self) -> f64 {
        self.cells
            .iter()
            .filter(|cell| cell.is_water())
            .map(|cell| cell.fill_level)
            .sum()
    }

    /// Reset every cell to empty water
    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::empty(cell.x, cell.y));
    }

    /// Scatter solid blocks (~10%) and water (~25%, up to 1.5 fill) over the grid
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            let roll: f64 = rng.random();
            *cell = if roll < 0.1 {
                Cell::solid(cell.x, cell.y)
            } else if roll < 0.35 {
                Cell::water(cell.x, cell.y, rng.random_range(0.0..1.5))
            } else {
                Cell::empty(cell.x, cell.y)
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellKind;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_empty_water() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.iter_cells().count(), 12);
        assert!(grid.iter_cells().all(|c| c.is_water() && c.fill_level == 0.0));
    }

    #[test]
    fn test_coordinates_match_storage() {
        let grid = Grid::new(5, 2);
        for (i, cell) in grid.iter_cells().enumerate() {
            assert_eq!(cell.x, i % 5);
            assert_eq!(cell.y, i / 5);
        }
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(3, 2);
        assert_eq!(
            grid.get(3, 0),
            Err(BoundsError::OutOfRange { x: 3, y: 0, columns: 3, rows: 2 })
        );
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(7, 7, Cell::empty(0, 0)).is_err());
    }

    #[test]
    fn test_set_rewrites_coordinates() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 1, Cell::water(0, 0, 0.5)).unwrap();
        let cell = grid.get(2, 1).unwrap();
        assert_eq!((cell.x, cell.y), (2, 1));
        assert_eq!(cell.fill_level, 0.5);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let grid = Grid::from_fill_rows(&[&[0.1, 0.2], &[0.3, 0.4]]);
        let first: Vec<f64> = grid.iter_cells().map(|c| c.fill_level).collect();
        let second: Vec<f64> = grid.iter_cells().map(|c| c.fill_level).collect();
        assert_eq!(first, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_volume_ignores_solids() {
        let mut grid = Grid::from_fill_rows(&[&[0.5, 0.25]]);
        grid.set(1, 0, Cell::new(CellKind::Solid, 4.0, 1, 0)).unwrap();
        assert!((grid.total_volume() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clear_and_randomize() {
        let mut grid = Grid::new(20, 20);
        grid.randomize(&mut StdRng::seed_from_u64(7));
        assert!(grid.iter_cells().any(|c| c.is_solid()));
        assert!(grid.iter_cells().all(|c| c.fill_level >= 0.0));

        grid.clear();
        assert_eq!(grid, Grid::new(20, 20));
    }
}
