use enum_iterator::IntoEnumIterator;
use Direction::*;

/// The eight directions of the Moore neighborhood, counter-clockwise from the right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Offset to the neighbor in this direction. Y grows downwards.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Right => (1, 0),
            UpRight => (1, -1),
            Up => (0, -1),
            UpLeft => (-1, -1),
            Left => (-1, 0),
            DownLeft => (-1, 1),
            Down => (0, 1),
            DownRight => (1, 1),
        }
    }

    /// The neighbor of `(x, y)` in this direction, or `None` if it falls off a
    /// `width` x `height` grid. There is no wraparound.
    #[inline]
    pub fn step(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        let nx = x.checked_add_signed(dx).filter(|&nx| nx < width)?;
        let ny = y.checked_add_signed(dy).filter(|&ny| ny < height)?;
        Some((nx, ny))
    }

    /// Every in-bounds neighbor of `(x, y)`. Cells on the border simply have fewer.
    #[inline]
    pub fn neighbors(
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        Direction::into_enum_iter().filter_map(move |dir| dir.step(x, y, width, height))
    }
}
