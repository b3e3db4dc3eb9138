/// Grid access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    #[error("cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },
}
