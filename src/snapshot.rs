use crate::Point;

/// An immutable copy of an engine's state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    generation: u64,
    alive_cells: Vec<Point>,
}

impl Snapshot {
    pub fn new(
        width: usize,
        height: usize,
        generation: u64,
        alive_cells: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            width,
            height,
            generation,
            alive_cells: alive_cells.into_iter().collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Alive coordinates, row-major when taken from an engine.
    #[inline]
    pub fn alive_cells(&self) -> &[Point] {
        &self.alive_cells
    }
}
