//! Decoder for the run-length encoded pattern format.
//!
//! ```text
//! #N Glider
//! x = 3, y = 3, rule = B3/S23
//! bo$2bo$3o!
//! ```
//!
//! Lines starting with `#` and blank lines are dropped. The first remaining line is the
//! header, the rest are concatenated into the body. In the body `b` is a dead run, `o` an
//! alive run and `$` ends rows; each may be prefixed by a decimal run length. `!` ends the
//! pattern.

use crate::{Category, FormatError, Pattern, Point, DEFAULT_RULE};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument};

lazy_static! {
    /// Finds `x = <width>, y = <height>` with an optional `, rule = <rule>` anywhere in a line.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"(?i)x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)(?:\s*,\s*rule\s*=\s*([^,\s]+))?"
    )
    .expect("header regex is valid");
}

/// The `x = .., y = .., rule = ..` line of a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub width: usize,
    pub height: usize,
    pub rule: String,
}

/// Parses a header line. The rule defaults to B3/S23 when absent.
pub fn parse_header(name: &str, line: &str) -> Result<Header, FormatError> {
    let invalid = || FormatError::InvalidHeader {
        name: name.to_string(),
    };
    let captures = HEADER_REGEX.captures(line.trim()).ok_or_else(invalid)?;
    let width = captures[1].parse().map_err(|_| invalid())?;
    let height = captures[2].parse().map_err(|_| invalid())?;
    let rule = captures
        .get(3)
        .map_or(DEFAULT_RULE, |m| m.as_str())
        .to_string();
    Ok(Header {
        width,
        height,
        rule,
    })
}

/// Decodes `text` into a pattern called `name`.
///
/// Fails as a whole on a bad header, an unsupported token, a missing `!`, or any alive
/// cell outside the width and height the header declares.
#[instrument(level = "debug", skip(text))]
pub fn decode(name: &str, category: Category, text: &str) -> Result<Pattern, FormatError> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let missing_body = || FormatError::MissingBody {
        name: name.to_string(),
    };
    let header = parse_header(name, lines.next().ok_or_else(missing_body)?)?;
    let body: String = lines.collect();
    if body.is_empty() {
        return Err(missing_body());
    }

    let cells = decode_body(name, &body, header.width, header.height)?;
    debug!(
        cells = cells.len(),
        width = header.width,
        height = header.height,
        rule = %header.rule,
        "decoded pattern"
    );
    Ok(Pattern::new(name, category, header.rule, cells))
}

fn decode_body(
    name: &str,
    body: &str,
    width: usize,
    height: usize,
) -> Result<Vec<Point>, FormatError> {
    let too_long = || FormatError::RunTooLong {
        name: name.to_string(),
    };
    let mut cells = Vec::new();
    // The first alive cell past the declared bounds. Reported only once `!` is reached,
    // so a later bad token or a missing terminator still wins.
    let mut outside: Option<Point> = None;
    let (mut x, mut y) = (0usize, 0usize);
    let mut pending: Option<usize> = None;

    for token in body.chars() {
        if let Some(digit) = token.to_digit(10) {
            let run = pending
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|run| run.checked_add(digit as usize))
                .ok_or_else(too_long)?;
            pending = Some(run);
            continue;
        }

        let run = pending.take().filter(|&run| run > 0).unwrap_or(1);
        match token {
            'b' | 'B' => x = x.checked_add(run).ok_or_else(too_long)?,
            'o' | 'O' => {
                let end = x.checked_add(run).ok_or_else(too_long)?;
                if y >= height {
                    outside.get_or_insert(Point::new(x, y));
                } else if end > width {
                    outside.get_or_insert(Point::new(x.max(width), y));
                }
                if y < height {
                    cells.extend((x..end.min(width)).map(|cx| Point::new(cx, y)));
                }
                x = end;
            }
            '$' => {
                y = y.checked_add(run).ok_or_else(too_long)?;
                x = 0;
            }
            '!' => {
                return match outside {
                    Some(Point { x, y }) => Err(FormatError::CellOutOfBounds {
                        name: name.to_string(),
                        x,
                        y,
                        width,
                        height,
                    }),
                    None => Ok(cells),
                };
            }
            // A run length followed by whitespace is dropped with it.
            c if c.is_whitespace() => {}
            token => {
                return Err(FormatError::UnsupportedToken {
                    name: name.to_string(),
                    token,
                })
            }
        }
    }

    Err(FormatError::MissingTerminator {
        name: name.to_string(),
    })
}
