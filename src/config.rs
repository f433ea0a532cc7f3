use crate::{Engine, Result, Totalistic, DEFAULT_RULE};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for building an [`Engine`], typically read from a TOML file.
///
/// ```toml
/// width = 120
/// height = 80
/// rule = "B36/S23"
/// seed = 7
/// density = 0.25
/// ```
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid width in cells.
    #[serde(default = "default_width")]
    width: usize,

    /// Grid height in cells.
    #[serde(default = "default_height")]
    height: usize,

    /// Rule in `B<digits>/S<digits>` notation.
    #[serde(default = "default_rule")]
    rule: String,

    /// Seed for the random source; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Randomize the grid with this density right after construction.
    #[serde(default)]
    density: Option<f64>,
}

fn default_width() -> usize {
    64
}

fn default_height() -> usize {
    48
}

fn default_rule() -> String {
    DEFAULT_RULE.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_width(), default_height())
    }
}

impl EngineConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rule: default_rule(),
            seed: None,
            density: None,
        }
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        debug!("loading engine config");
        let config = Self::from_toml_str(&std::fs::read_to_string(path.as_ref())?)?;
        info!(width = config.width, height = config.height, rule = %config.rule, "config loaded");
        Ok(config)
    }

    /// Builds the engine the configuration describes.
    #[instrument(skip(self), fields(width = self.width, height = self.height, rule = %self.rule))]
    pub fn build(&self) -> Result<Engine<Totalistic>> {
        let rule: Totalistic = self.rule.parse()?;
        let mut engine = Engine::with_rule(self.width, self.height, rule)?;
        if let Some(seed) = self.seed {
            engine = engine.with_seed(seed);
        }
        if let Some(density) = self.density {
            engine.randomize(density);
        }
        Ok(engine)
    }
}
