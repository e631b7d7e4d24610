//! Configuration types for green-score operations.
//!
//! Provides structured configuration for scoring and the `score` command.

use super::defaults::{
    DEFAULT_EXCLUSIVE_LABELS, DEFAULT_MAX_PRODUCT_LABEL_BONUS, DEFAULT_MAX_PRODUCT_PACKAGING_MALUS,
    DEFAULT_MAX_RECIPE_BONUS, DEFAULT_THREATENED_MALUS, DEFAULT_TRANSPORT_FACTOR,
};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are merged over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring constants (caps, floors, factors)
    pub scoring: ScoringConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Where reference datasets are read from
    pub reference: ReferenceConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the cap applied to a product's cumulated label bonus.
    pub const fn max_product_label_bonus(mut self, cap: f64) -> Self {
        self.config.scoring.max_product_label_bonus = cap;
        self
    }

    /// Set the floor applied to a product's packaging malus.
    pub const fn max_product_packaging_malus(mut self, floor: f64) -> Self {
        self.config.scoring.max_product_packaging_malus = floor;
        self
    }

    /// Set the cap applied to the recipe's summed bonuses.
    pub const fn max_recipe_bonus(mut self, cap: f64) -> Self {
        self.config.scoring.max_recipe_bonus = cap;
        self
    }

    /// Set the threatened-species / palm-oil malus.
    pub const fn threatened_malus(mut self, malus: f64) -> Self {
        self.config.scoring.threatened_malus = malus;
        self
    }

    /// Set the reference data directory.
    pub fn data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config.reference.data_dir = dir;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Treat failed reference lookups as a failure.
    pub const fn strict_lookups(mut self, strict: bool) -> Self {
        self.config.behavior.strict_lookups = strict;
        self
    }

    /// Fail when the green score is below this value.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Scoring constants
// ============================================================================

/// Constants of the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Cap on a product's cumulated label bonus
    pub max_product_label_bonus: f64,
    /// Floor on a product's cumulated packaging malus (negative)
    pub max_product_packaging_malus: f64,
    /// Cap on the sum of recipe bonuses
    pub max_recipe_bonus: f64,
    /// Malus applied once when palm oil or a threatened species is present
    pub threatened_malus: f64,
    /// Multiplier turning a transport score into a transport bonus
    pub transport_factor: f64,
    /// Labels that cannot be cumulated with each other
    pub exclusive_labels: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_product_label_bonus: DEFAULT_MAX_PRODUCT_LABEL_BONUS,
            max_product_packaging_malus: DEFAULT_MAX_PRODUCT_PACKAGING_MALUS,
            max_recipe_bonus: DEFAULT_MAX_RECIPE_BONUS,
            threatened_malus: DEFAULT_THREATENED_MALUS,
            transport_factor: DEFAULT_TRANSPORT_FACTOR,
            exclusive_labels: DEFAULT_EXCLUSIVE_LABELS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ScoringConfig {
    /// Whether a label belongs to the non-cumulative group.
    #[must_use]
    pub fn is_exclusive_label(&self, name: &str) -> bool {
        self.exclusive_labels.iter().any(|l| l == name)
    }
}

// ============================================================================
// Output / reference / behavior
// ============================================================================

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Reference dataset location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Directory holding the reference JSON files
    pub data_dir: Option<PathBuf>,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit non-zero when a recipe names unknown reference records
    pub strict_lookups: bool,
    /// Exit non-zero when the green score is below this value
    pub min_score: Option<f64>,
}

// ============================================================================
// Command Configuration
// ============================================================================

/// Configuration for the `score` command.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Recipe document to score
    pub recipe_path: PathBuf,
    /// Directory holding the reference JSON files
    pub data_dir: PathBuf,
    /// Scoring constants
    pub scoring: ScoringConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl ScoreConfig {
    /// Build a command config from the merged application config.
    ///
    /// Falls back to the current directory when no data directory is set.
    #[must_use]
    pub fn from_app_config(recipe_path: PathBuf, app: AppConfig) -> Self {
        Self {
            recipe_path,
            data_dir: app.reference.data_dir.unwrap_or_else(|| PathBuf::from(".")),
            scoring: app.scoring,
            output: app.output,
            behavior: app.behavior,
        }
    }
}
