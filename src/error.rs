use derive_more::{Display, Error, From};

/// Result type returned by the file and configuration entry points.
pub type Result<T> = std::result::Result<T, Error>;

/// A grid was given non-positive dimensions or a coordinate outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoundsError {
    #[display("grid dimensions must be positive, got {width}x{height}")]
    Dimensions { width: usize, height: usize },
    #[display("grid of {width}x{height} cells is too large to allocate")]
    TooLarge { width: usize, height: usize },
    #[display("cell ({x},{y}) is outside {width}x{height}")]
    Cell {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Malformed pattern text or rule string. Nothing partial is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum FormatError {
    #[display("pattern '{name}' should contain a header and a body")]
    MissingBody { name: String },
    #[display("pattern '{name}' has an invalid header, expected `x = <width>, y = <height>[, rule = <rule>]`")]
    InvalidHeader { name: String },
    #[display("pattern '{name}' contains unsupported token '{token}'")]
    UnsupportedToken { name: String, token: char },
    #[display("pattern '{name}' has a run length that does not fit in memory")]
    RunTooLong { name: String },
    #[display("pattern '{name}' does not end with '!'")]
    MissingTerminator { name: String },
    #[display("pattern '{name}' has alive cell ({x},{y}) outside x={width}, y={height}")]
    CellOutOfBounds {
        name: String,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[display("unknown rule {rule:?}, expected B<digits>/S<digits>")]
    InvalidRule { rule: String },
}

/// A persisted snapshot record failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DataError {
    #[display("grid dimensions in snapshot must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i64, height: i64 },
    #[display("grid dimensions in snapshot are too large, got {width}x{height}")]
    DimensionsTooLarge { width: i64, height: i64 },
    #[display("generation in snapshot must not be negative, got {generation}")]
    NegativeGeneration { generation: i64 },
    #[display("cell ({x},{y}) is outside persisted grid bounds {width}x{height}")]
    CellOutOfBounds {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
}

/// Any error the crate can produce.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    #[display("{_0}")]
    Bounds(BoundsError),
    #[display("{_0}")]
    Format(FormatError),
    #[display("{_0}")]
    Data(DataError),
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
    #[display("invalid snapshot JSON: {_0}")]
    Json(serde_json::Error),
    #[display("invalid configuration: {_0}")]
    Toml(toml::de::Error),
    #[cfg(feature = "binary")]
    #[display("invalid binary snapshot: {_0}")]
    Bincode(bincode::Error),
}
