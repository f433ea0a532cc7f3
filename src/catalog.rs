use crate::{rle, Category, Pattern};
use tracing::{instrument, warn};

const R_PENTOMINO: &str = "\
#N R-pentomino
x = 3, y = 3, rule = B3/S23
b2o$2o$bo!";

const GOSPER_GLIDER_GUN: &str = "\
#N Gosper glider gun
x = 36, y = 9, rule = B3/S23
24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$2o8bo3bob2o4b
obo$10bo5bo7bo$11bo3bo$12b2o!";

/// An ordered, name-addressable collection of patterns.
///
/// Sources that fail to decode are remembered as messages rather than aborting the load.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    patterns: Vec<Pattern>,
    load_errors: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic patterns shipped with the crate.
    pub fn builtin() -> Self {
        let mut catalog = Catalog {
            patterns: vec![
                Pattern::block(),
                Pattern::blinker(),
                Pattern::glider(),
                Pattern::toad(),
                Pattern::beacon(),
            ],
            load_errors: Vec::new(),
        };
        catalog.load("R-pentomino", Category::Methuselah, R_PENTOMINO);
        catalog.load("Gosper glider gun", Category::Gun, GOSPER_GLIDER_GUN);
        catalog
    }

    /// Decodes an RLE source and appends it. Returns whether it decoded.
    #[instrument(skip(self, text))]
    pub fn load(&mut self, name: &str, category: Category, text: &str) -> bool {
        match rle::decode(name, category, text) {
            Ok(pattern) => {
                self.patterns.push(pattern);
                true
            }
            Err(e) => {
                warn!(error = %e, "skipping pattern");
                self.load_errors.push(e.to_string());
                false
            }
        }
    }

    pub fn push(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// Looks a pattern up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Why each rejected source failed, in load order.
    pub fn load_errors(&self) -> &[String] {
        &self.load_errors
    }
}
