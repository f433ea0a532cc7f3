use crate::{FormatError, Rule};
use std::fmt;
use std::str::FromStr;

/// Conway's Game of Life: birth on 3, survival on 2 or 3.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Conway;

impl Rule for Conway {
    #[inline]
    fn next_state(&self, alive: bool, neighbors: usize) -> bool {
        if alive {
            (2..=3).contains(&neighbors)
        } else {
            neighbors == 3
        }
    }
}

/// A 2-state outer-totalistic rule over the Moore neighborhood, written `B<digits>/S<digits>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Totalistic {
    birth: [bool; 9],
    survival: [bool; 9],
}

impl Totalistic {
    /// B3/S23.
    pub const LIFE: Totalistic = Totalistic {
        birth: [false, false, false, true, false, false, false, false, false],
        survival: [false, false, true, true, false, false, false, false, false],
    };

    /// Builds a rule from the neighbor counts that cause birth and survival.
    /// Counts above 8 can never occur and are ignored.
    pub fn new(birth: &[usize], survival: &[usize]) -> Self {
        let mut rule = Totalistic {
            birth: [false; 9],
            survival: [false; 9],
        };
        for &n in birth.iter().filter(|&&n| n <= 8) {
            rule.birth[n] = true;
        }
        for &n in survival.iter().filter(|&&n| n <= 8) {
            rule.survival[n] = true;
        }
        rule
    }
}

impl Default for Totalistic {
    fn default() -> Self {
        Self::LIFE
    }
}

impl Rule for Totalistic {
    #[inline]
    fn next_state(&self, alive: bool, neighbors: usize) -> bool {
        let table = if alive { &self.survival } else { &self.birth };
        table.get(neighbors).copied().unwrap_or(false)
    }
}

impl FromStr for Totalistic {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidRule {
            rule: s.to_string(),
        };
        let (b, survival) = s.trim().split_once('/').ok_or_else(invalid)?;
        let birth = b.strip_prefix(['B', 'b']).ok_or_else(invalid)?;
        let survival = survival.strip_prefix(['S', 's']).ok_or_else(invalid)?;

        let digits = |conditions: &str| -> Option<[bool; 9]> {
            let mut table = [false; 9];
            for ch in conditions.chars() {
                let n = ch.to_digit(10).filter(|&n| n <= 8)?;
                table[n as usize] = true;
            }
            Some(table)
        };

        Ok(Totalistic {
            birth: digits(birth).ok_or_else(invalid)?,
            survival: digits(survival).ok_or_else(invalid)?,
        })
    }
}

impl fmt::Display for Totalistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in (0..=8).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in (0..=8).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_transitions() {
        assert!(!Conway.next_state(true, 1));
        assert!(Conway.next_state(true, 2));
        assert!(Conway.next_state(true, 3));
        assert!(!Conway.next_state(true, 4));
        assert!(!Conway.next_state(false, 2));
        assert!(Conway.next_state(false, 3));
        assert!(!Conway.next_state(false, 4));
    }

    #[test]
    fn life_matches_conway_everywhere() {
        for alive in [false, true] {
            for n in 0..=8 {
                assert_eq!(
                    Totalistic::LIFE.next_state(alive, n),
                    Conway.next_state(alive, n)
                );
            }
        }
    }

    #[test]
    fn parses_and_displays_rule_strings() {
        assert_eq!("B3/S23".parse::<Totalistic>(), Ok(Totalistic::LIFE));
        assert_eq!("b3/s23".parse::<Totalistic>(), Ok(Totalistic::LIFE));

        let highlife: Totalistic = "B36/S23".parse().unwrap();
        assert!(highlife.next_state(false, 6));
        assert_eq!(highlife.to_string(), "B36/S23");
        assert_eq!(highlife, Totalistic::new(&[3, 6], &[2, 3]));

        let seeds: Totalistic = "B2/S".parse().unwrap();
        assert!(!seeds.next_state(true, 2));
        assert_eq!(seeds.to_string(), "B2/S");
    }

    #[test]
    fn rejects_malformed_rule_strings() {
        for bad in ["", "B3S23", "B9/S23", "23/3", "B3/Sx"] {
            assert_eq!(
                bad.parse::<Totalistic>(),
                Err(FormatError::InvalidRule {
                    rule: bad.to_string()
                })
            );
        }
    }
}
