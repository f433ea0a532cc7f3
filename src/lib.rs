//! Gridlife is a bounded, deterministic Game of Life engine.
//!
//! A [`Grid`] holds a dense field of dead or alive cells, an [`Engine`] advances it with a
//! pluggable [`Rule`], patterns are decoded from RLE text with [`rle::decode`], and the whole
//! state can be captured as a [`Snapshot`] and persisted through the [`codec`] module.
//!
//! Cells past the border of the grid do not exist: they are never counted as alive neighbors
//! and there is no wraparound.

mod catalog;
pub mod codec;
mod config;
mod engine;
mod error;
mod grid;
pub mod moore;
mod pattern;
pub mod rle;
mod rule;
mod snapshot;

pub use catalog::Catalog;
pub use config::EngineConfig;
pub use engine::{ChangeKind, Engine, ObserverId};
pub use error::{BoundsError, DataError, Error, FormatError, Result};
pub use grid::Grid;
pub use pattern::{Category, Pattern, Point, DEFAULT_RULE};
pub use rule::{Conway, Totalistic};
pub use snapshot::Snapshot;

/// Decides the next state of a single cell.
///
/// The engine builds the entire next generation from the current one before replacing it,
/// so a rule only ever sees old board state and the update order cannot affect the outcome.
/// Rules are shared across the worker threads computing a generation, hence `Send + Sync`.
pub trait Rule: Send + Sync {
    /// `neighbors` is the number of alive cells among the in-bounds Moore neighbors.
    fn next_state(&self, alive: bool, neighbors: usize) -> bool;
}

impl<R> Rule for &R
where
    R: Rule + ?Sized,
{
    #[inline]
    fn next_state(&self, alive: bool, neighbors: usize) -> bool {
        (**self).next_state(alive, neighbors)
    }
}

impl<R> Rule for Box<R>
where
    R: Rule + ?Sized,
{
    #[inline]
    fn next_state(&self, alive: bool, neighbors: usize) -> bool {
        (**self).next_state(alive, neighbors)
    }
}
