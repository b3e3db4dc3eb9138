/// What occupies a cell. Only water takes part in flow.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellKind {
    #[default]
    Water,
    Solid,
}

impl CellKind {
    /// Switch between water and solid (brush toggle)
    pub const fn toggle(self) -> Self {
        match self {
            CellKind::Water => CellKind::Solid,
            CellKind::Solid => CellKind::Water,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CellKind::Water => "Water",
            CellKind::Solid => "Solid",
        }
    }
}

/// Cell is the atomic unit of simulated state.
/// `fill_level` of 1.0 is a full cell; anything above is pressurized.
/// The coordinates mirror the storage position so a renderer can place
/// the cell without knowing the grid layout.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub kind: CellKind,
    pub fill_level: f64,
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(kind: CellKind, fill_level: f64, x: usize, y: usize) -> Self {
        Self { kind, fill_level, x, y }
    }

    /// Empty water cell, the initial state of every position
    pub const fn empty(x: usize, y: usize) -> Self {
        Self::new(CellKind::Water, 0.0, x, y)
    }

    pub const fn water(x: usize, y: usize, fill_level: f64) -> Self {
        Self::new(CellKind::Water, fill_level, x, y)
    }

    pub const fn solid(x: usize, y: usize) -> Self {
        Self::new(CellKind::Solid, 1.0, x, y)
    }

    pub const fn is_water(&self) -> bool {
        matches!(self.kind, CellKind::Water)
    }

    pub const fn is_solid(&self) -> bool {
        matches!(self.kind, CellKind::Solid)
    }

    /// Water holding more than a full cell
    pub fn is_pressurized(&self) -> bool {
        self.is_water() && self.fill_level > 1.0
    }

    /// Room left before the cell is full, never negative
    pub fn free_space(&self) -> f64 {
        (1.0 - self.fill_level).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_toggle() {
        assert_eq!(CellKind::Water.toggle(), CellKind::Solid);
        assert_eq!(CellKind::Solid.toggle(), CellKind::Water);
    }

    #[test]
    fn test_empty_cell_is_water() {
        let cell = Cell::empty(3, 4);
        assert!(cell.is_water());
        assert_eq!(cell.fill_level, 0.0);
        assert_eq!((cell.x, cell.y), (3, 4));
    }

    #[test]
    fn test_pressurized() {
        assert!(Cell::water(0, 0, 1.2).is_pressurized());
        assert!(!Cell::water(0, 0, 1.0).is_pressurized());
        // Solids never count as pressurized, whatever they carry
        assert!(!Cell::new(CellKind::Solid, 3.0, 0, 0).is_pressurized());
    }

    #[test]
    fn test_free_space() {
        assert!((Cell::water(0, 0, 0.25).free_space() - 0.75).abs() < 1e-12);
        assert_eq!(Cell::water(0, 0, 1.5).free_space(), 0.0);
    }
}
