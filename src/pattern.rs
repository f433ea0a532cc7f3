use derive_getters::Getters;
use derive_more::Display;
use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The rule string patterns are written for unless they say otherwise.
pub const DEFAULT_RULE: &str = "B3/S23";

/// A non-negative cell coordinate, either absolute on a grid or an offset inside a pattern.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// How a pattern behaves when left alone.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize, IntoEnumIterator,
)]
pub enum Category {
    StillLife,
    Oscillator,
    Spaceship,
    Methuselah,
    Gun,
}

impl FromStr for Category {
    type Err = String;

    /// Matches the variant name ignoring case, so `"stilllife"` and `"StillLife"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::into_enum_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown pattern category {:?}", s))
    }
}

/// A named, reusable set of alive-cell offsets relative to (0, 0).
///
/// Patterns are immutable once built; the same value can be stamped onto any
/// number of grids at any origin.
#[derive(Clone, Debug, PartialEq, Eq, Getters)]
pub struct Pattern {
    name: String,
    category: Category,
    rule: String,
    cells: Vec<Point>,
}

impl Pattern {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        rule: impl Into<String>,
        cells: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            rule: rule.into(),
            cells: cells.into_iter().collect(),
        }
    }

    /// Number of alive cells the pattern describes.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn classic(name: &str, category: Category, cells: &[(usize, usize)]) -> Self {
        Self::new(
            name,
            category,
            DEFAULT_RULE,
            cells.iter().copied().map(Point::from),
        )
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Self::classic("Block", Category::StillLife, &[(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Period 2 oscillator, horizontal phase on row 1.
    pub fn blinker() -> Self {
        Self::classic("Blinker", Category::Oscillator, &[(0, 1), (1, 1), (2, 1)])
    }

    /// The smallest spaceship, travelling towards +x/+y.
    pub fn glider() -> Self {
        Self::classic(
            "Glider",
            Category::Spaceship,
            &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    pub fn toad() -> Self {
        Self::classic(
            "Toad",
            Category::Oscillator,
            &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    pub fn beacon() -> Self {
        Self::classic(
            "Beacon",
            Category::Oscillator,
            &[
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 2),
                (3, 2),
                (2, 3),
                (3, 3),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_ignoring_case() {
        assert_eq!("stilllife".parse::<Category>(), Ok(Category::StillLife));
        assert_eq!(" GUN ".parse::<Category>(), Ok(Category::Gun));
        assert!("puffer".parse::<Category>().is_err());
        assert_eq!(Category::into_enum_iter().count(), 5);
    }

    #[test]
    fn factory_patterns_use_classic_rule() {
        for pattern in [
            Pattern::block(),
            Pattern::blinker(),
            Pattern::glider(),
            Pattern::toad(),
            Pattern::beacon(),
        ] {
            assert_eq!(pattern.rule(), DEFAULT_RULE);
            assert!(!pattern.is_empty());
        }
        assert_eq!(Pattern::beacon().len(), 8);
        assert_eq!(*Pattern::glider().category(), Category::Spaceship);
    }
}
