use crate::moore::Direction;
use crate::{BoundsError, Pattern, Point, Rule};
use boolinator::Boolinator;
use itertools::iproduct;
use ndarray::{s, Array2, Zip};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// A dense, bounded `width` x `height` field of dead or alive cells.
///
/// Storage is row-major and indexed `(y, x)`; every public method takes `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    /// Make a new grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, BoundsError> {
        check_dimensions(width, height)?;
        Ok(Grid {
            cells: Array2::from_elem((height, width), false),
        })
    }

    /// Make a grid by evaluating each coordinate with a closure.
    pub fn from_fn<F>(width: usize, height: usize, mut coord_map: F) -> Result<Self, BoundsError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        check_dimensions(width, height)?;
        Ok(Grid {
            cells: Array2::from_shape_fn((height, width), |(y, x)| coord_map(x, y)),
        })
    }

    /// Make a grid with exactly the given cells alive.
    pub fn from_alive<I>(width: usize, height: usize, alive: I) -> Result<Self, BoundsError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut grid = Self::new(width, height)?;
        for Point { x, y } in alive {
            grid.set(x, y, true)?;
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells, dead or alive.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    fn check(&self, x: usize, y: usize) -> Result<(), BoundsError> {
        self.contains(x, y).ok_or_else(|| BoundsError::Cell {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, BoundsError> {
        self.check(x, y)?;
        Ok(self.cells[(y, x)])
    }

    /// Store `alive` at `(x, y)` and report whether the stored value changed.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<bool, BoundsError> {
        self.check(x, y)?;
        let cell = &mut self.cells[(y, x)];
        let changed = *cell != alive;
        *cell = alive;
        Ok(changed)
    }

    /// Counts the alive cells with a full scan.
    pub fn count_alive(&self) -> usize {
        self.cells.par_iter().filter(|&&c| c).count()
    }

    /// Alive coordinates in row-major order. Each call starts a fresh pass.
    pub fn alive_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &alive)| alive)
            .map(|((y, x), _)| Point::new(x, y))
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Overwrites every cell, visiting them in row-major order.
    pub fn fill_with<F>(&mut self, mut coord_map: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        for ((y, x), cell) in self.cells.indexed_iter_mut() {
            *cell = coord_map(x, y);
        }
    }

    /// A new grid of the requested size.
    ///
    /// With `clear` the result is entirely dead. Otherwise the overlapping
    /// rectangle anchored at (0, 0) is copied and any added area is dead.
    pub fn resize(&self, width: usize, height: usize, clear: bool) -> Result<Grid, BoundsError> {
        let mut resized = Grid::new(width, height)?;
        if !clear {
            let copy_width = self.width().min(width);
            let copy_height = self.height().min(height);
            resized
                .cells
                .slice_mut(s![..copy_height, ..copy_width])
                .assign(&self.cells.slice(s![..copy_height, ..copy_width]));
        }
        Ok(resized)
    }

    /// Number of alive cells among the in-bounds Moore neighbors of `(x, y)`.
    /// The caller keeps `(x, y)` inside the grid.
    #[inline]
    pub(crate) fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        Direction::neighbors(x, y, self.width(), self.height())
            .filter(|&(nx, ny)| self.cells[(ny, nx)])
            .count()
    }

    /// Computes the whole next generation into a fresh grid.
    ///
    /// Every cell only ever reads `self`, so no cell can observe a neighbor
    /// that was already advanced in the same generation.
    pub fn next_generation<R>(&self, rule: &R) -> Grid
    where
        R: Rule + ?Sized,
    {
        let mut next = Array2::from_elem(self.cells.raw_dim(), false);
        Zip::indexed(&mut next).par_for_each(|(y, x), cell| {
            *cell = rule.next_state(self.cells[(y, x)], self.alive_neighbors(x, y));
        });
        Grid { cells: next }
    }

    /// Sets every in-bounds cell of `pattern` placed at the origin alive.
    ///
    /// Cells landing outside the grid are skipped. Returns how many cells went
    /// from dead to alive.
    pub fn stamp(&mut self, pattern: &Pattern, origin_x: isize, origin_y: isize) -> usize {
        let mut changed = 0;
        for point in pattern.cells() {
            let target = offset(origin_x, point.x).zip(offset(origin_y, point.y));
            if let Some((x, y)) = target.filter(|&(x, y)| self.contains(x, y)) {
                let cell = &mut self.cells[(y, x)];
                if !*cell {
                    *cell = true;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.height(), 0..self.width()).map(|(y, x)| (x, y))
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), BoundsError> {
    (width > 0 && height > 0).ok_or(BoundsError::Dimensions { width, height })?;
    fits(width, height).ok_or(BoundsError::TooLarge { width, height })
}

/// Whether a `width` x `height` array can be indexed at all.
pub(crate) fn fits(width: usize, height: usize) -> bool {
    width
        .checked_mul(height)
        .map_or(false, |cells| cells <= isize::MAX as usize)
}

/// `origin + delta` as a grid index, if it is non-negative and representable.
#[inline]
fn offset(origin: isize, delta: usize) -> Option<usize> {
    let delta = isize::try_from(delta).ok()?;
    usize::try_from(origin.checked_add(delta)?).ok()
}
