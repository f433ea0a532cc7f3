//! Stable external record for [`Snapshot`]s.
//!
//! The JSON form is
//!
//! ```json
//! { "width": 12, "height": 9, "generation": 3, "aliveCells": [ { "x": 1, "y": 2 } ] }
//! ```
//!
//! Every decoding path validates the record before a snapshot is produced: dimensions must
//! be positive and small enough to allocate, the generation must not be negative and every
//! listed cell must lie inside the dimensions.

use crate::grid::fits;
use crate::{DataError, Point, Result, Snapshot};
use boolinator::Boolinator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// One alive cell in a persisted record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedCell {
    pub x: i64,
    pub y: i64,
}

/// A snapshot as it is written to storage.
///
/// Signed fields let malformed input reach validation instead of failing inside the parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub width: i64,
    pub height: i64,
    pub generation: i64,
    pub alive_cells: Vec<PersistedCell>,
}

/// Maps a snapshot onto its record.
pub fn encode(snapshot: &Snapshot) -> PersistedState {
    PersistedState {
        width: snapshot.width() as i64,
        height: snapshot.height() as i64,
        generation: i64::try_from(snapshot.generation()).unwrap_or(i64::MAX),
        alive_cells: snapshot
            .alive_cells()
            .iter()
            .map(|p| PersistedCell {
                x: p.x as i64,
                y: p.y as i64,
            })
            .collect(),
    }
}

/// Validates a record and turns it back into a snapshot. A single bad cell rejects it all.
pub fn decode(state: PersistedState) -> std::result::Result<Snapshot, DataError> {
    let PersistedState {
        width,
        height,
        generation,
        alive_cells,
    } = state;

    let dimensions = usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .filter(|&(w, h)| w > 0 && h > 0);
    let (w, h) = dimensions.ok_or(DataError::NonPositiveDimensions { width, height })?;
    fits(w, h).ok_or(DataError::DimensionsTooLarge { width, height })?;
    let generation =
        u64::try_from(generation).map_err(|_| DataError::NegativeGeneration { generation })?;

    let cells = alive_cells
        .into_iter()
        .map(|PersistedCell { x, y }| {
            let point = usize::try_from(x)
                .ok()
                .zip(usize::try_from(y).ok())
                .filter(|&(px, py)| px < w && py < h);
            point.map(Point::from).ok_or(DataError::CellOutOfBounds {
                x,
                y,
                width,
                height,
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Snapshot::new(w, h, generation, cells))
}

/// Pretty-printed JSON.
pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(&encode(snapshot))?)
}

pub fn from_json(json: &str) -> Result<Snapshot> {
    let state: PersistedState = serde_json::from_str(json)?;
    Ok(decode(state)?)
}

/// Writes `snapshot` as JSON to `path`, replacing any existing file.
#[instrument(skip(path, snapshot), fields(path = %path.as_ref().display()))]
pub fn save(path: impl AsRef<Path>, snapshot: &Snapshot) -> Result<()> {
    fs::write(path.as_ref(), to_json(snapshot)?)?;
    debug!(cells = snapshot.alive_cells().len(), "saved snapshot");
    Ok(())
}

#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Snapshot> {
    let snapshot = from_json(&fs::read_to_string(path.as_ref())?)?;
    debug!(
        width = snapshot.width(),
        height = snapshot.height(),
        generation = snapshot.generation(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Compact binary form of the same record.
#[cfg(feature = "binary")]
pub fn to_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    Ok(bincode::serialize(&encode(snapshot))?)
}

#[cfg(feature = "binary")]
pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
    let state: PersistedState = bincode::deserialize(bytes)?;
    Ok(decode(state)?)
}
