use crate::{BoundsError, Conway, Grid, Pattern, Rule, Snapshot};
use derive_more::Display;
use enum_iterator::IntoEnumIterator;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::sync::mpsc;
use tracing::{debug, instrument, trace};

/// What kind of mutation an engine just completed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, IntoEnumIterator)]
pub enum ChangeKind {
    Step,
    Edit,
    Resize,
    Clear,
    Load,
    Randomize,
    Pattern,
}

/// Handle returned by [`Engine::subscribe`], used to unsubscribe again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

type Observer = Box<dyn FnMut(ChangeKind) + Send>;

/// Owns a grid and advances it with a rule.
///
/// Every operation runs to completion before returning and notifies all observers before it
/// does. The engine does no locking; callers must serialize access to it.
pub struct Engine<R = Conway> {
    grid: Grid,
    rule: R,
    rng: Box<dyn RngCore + Send>,
    generation: u64,
    alive: usize,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: usize,
}

impl Engine<Conway> {
    /// A dead `width` x `height` engine running Conway's Game of Life.
    pub fn new(width: usize, height: usize) -> Result<Self, BoundsError> {
        Self::with_rule(width, height, Conway)
    }
}

impl<R> Engine<R>
where
    R: Rule,
{
    /// A dead `width` x `height` engine running `rule`, with an entropy-seeded random source.
    pub fn with_rule(width: usize, height: usize, rule: R) -> Result<Self, BoundsError> {
        Ok(Engine {
            grid: Grid::new(width, height)?,
            rule,
            rng: Box::new(ChaCha8Rng::from_entropy()),
            generation: 0,
            alive: 0,
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    /// Replaces the random source used by [`Engine::randomize`].
    pub fn with_rng<G>(mut self, rng: G) -> Self
    where
        G: RngCore + Send + 'static,
    {
        self.rng = Box::new(rng);
        self
    }

    /// Makes [`Engine::randomize`] reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Steps completed since the last reset.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, BoundsError> {
        self.grid.get(x, y)
    }

    /// Sets one cell. Emits [`ChangeKind::Edit`] only if the cell actually changed.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<bool, BoundsError> {
        let changed = self.grid.set(x, y, alive)?;
        if changed {
            if alive {
                self.alive += 1;
            } else {
                self.alive -= 1;
            }
            trace!(x, y, alive, "edited cell");
            self.notify(ChangeKind::Edit);
        }
        Ok(changed)
    }

    /// Advances every cell by one generation at once.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn step(&mut self) {
        self.grid = self.grid.next_generation(&self.rule);
        self.alive = self.grid.count_alive();
        self.generation += 1;
        debug!(alive = self.alive, "stepped");
        self.notify(ChangeKind::Step);
    }

    /// Kills every cell and resets the generation.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.alive = 0;
        self.generation = 0;
        debug!("cleared");
        self.notify(ChangeKind::Clear);
    }

    /// Resizes anchored at (0, 0), cropping or padding with dead cells.
    ///
    /// The generation is reset only when `clear` is set.
    #[instrument(level = "debug", skip(self))]
    pub fn resize(&mut self, width: usize, height: usize, clear: bool) -> Result<(), BoundsError> {
        self.grid = self.grid.resize(width, height, clear)?;
        self.alive = self.grid.count_alive();
        if clear {
            self.generation = 0;
        }
        debug!(alive = self.alive, "resized");
        self.notify(ChangeKind::Resize);
        Ok(())
    }

    /// Refills the grid, making each cell alive with probability `density`.
    ///
    /// `density` is clamped into `[0, 1]`; NaN counts as 0.
    #[instrument(level = "debug", skip(self))]
    pub fn randomize(&mut self, density: f64) {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };

        let rng = &mut self.rng;
        self.grid.fill_with(|_, _| rng.gen_bool(density));
        self.alive = self.grid.count_alive();
        self.generation = 0;
        debug!(alive = self.alive, "randomized");
        self.notify(ChangeKind::Randomize);
    }

    /// Stamps `pattern` with its (0, 0) offset at the origin, leaving other cells alone.
    ///
    /// Cells that fall off the grid are skipped. Emits [`ChangeKind::Pattern`] once, even
    /// if nothing changed, and returns how many cells were brought to life.
    pub fn place_pattern(&mut self, pattern: &Pattern, origin_x: isize, origin_y: isize) -> usize {
        let changed = self.grid.stamp(pattern, origin_x, origin_y);
        self.alive += changed;
        debug!(
            pattern = %pattern.name(),
            origin_x,
            origin_y,
            changed,
            "placed pattern"
        );
        self.notify(ChangeKind::Pattern);
        changed
    }

    pub fn create_snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.width(),
            self.height(),
            self.generation,
            self.grid.alive_cells(),
        )
    }

    /// Replaces the whole state with `snapshot`.
    ///
    /// Listed cells outside the snapshot's own bounds are dropped. Fails only for a
    /// hand-built snapshot with non-positive dimensions.
    #[instrument(level = "debug", skip(self, snapshot), fields(
        width = snapshot.width(),
        height = snapshot.height(),
        generation = snapshot.generation()
    ))]
    pub fn load_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), BoundsError> {
        let mut grid = Grid::new(snapshot.width(), snapshot.height())?;
        for point in snapshot.alive_cells() {
            if grid.contains(point.x, point.y) {
                grid.set(point.x, point.y, true)?;
            }
        }
        self.grid = grid;
        self.alive = self.grid.count_alive();
        self.generation = snapshot.generation();
        debug!(alive = self.alive, "loaded snapshot");
        self.notify(ChangeKind::Load);
        Ok(())
    }

    /// Registers a callback invoked after every completed mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(ChangeKind) + Send + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether `id` was subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// A channel receiving every change from now on.
    pub fn changes(&mut self) -> mpsc::Receiver<ChangeKind> {
        let (sender, receiver) = mpsc::channel();
        self.subscribe(move |kind| {
            // The receiver may be gone; that is the subscriber's business.
            let _ = sender.send(kind);
        });
        receiver
    }

    fn notify(&mut self, kind: ChangeKind) {
        for (_, observer) in &mut self.observers {
            observer(kind);
        }
    }
}

impl<R> fmt::Debug for Engine<R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("rule", &self.rule)
            .field("generation", &self.generation)
            .field("alive", &self.alive)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn set_cell_only_notifies_on_change() {
        let mut engine = Engine::new(3, 3).unwrap();
        let changes = engine.changes();
        assert_eq!(engine.set_cell(1, 1, true), Ok(true));
        assert_eq!(engine.set_cell(1, 1, true), Ok(false));
        assert_eq!(engine.set_cell(1, 1, false), Ok(true));
        assert_eq!(engine.alive_count(), 0);
        assert_eq!(changes.try_iter().collect::<Vec<_>>(), vec![ChangeKind::Edit; 2]);
    }

    #[test]
    fn unsubscribed_observers_are_not_called() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut engine = Engine::new(2, 2).unwrap();
        let log = Arc::clone(&seen);
        let id = engine.subscribe(move |kind| log.lock().unwrap().push(kind));
        engine.clear();
        assert!(engine.unsubscribe(id));
        assert!(!engine.unsubscribe(id));
        engine.step();
        assert_eq!(*seen.lock().unwrap(), vec![ChangeKind::Clear]);
    }

    #[test]
    fn every_change_kind_is_distinct() {
        let kinds: Vec<_> = ChangeKind::into_enum_iter().collect();
        assert_eq!(kinds.len(), 7);
        assert_eq!(ChangeKind::Randomize.to_string(), "Randomize");
    }
}
