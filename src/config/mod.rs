//! Configuration module for green-score.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use green_score::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .max_recipe_bonus(15.0)
//!     .strict_lookups(true)
//!     .build();
//!
//! // Load from file
//! use green_score::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.green-score.yaml` file in your project root or `~/.config/green-score/`:
//!
//! ```yaml
//! scoring:
//!   max_recipe_bonus: 15
//! reference:
//!   data_dir: ./public
//! behavior:
//!   min_score: 60
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{
    DEFAULT_EXCLUSIVE_LABELS, DEFAULT_MAX_PRODUCT_LABEL_BONUS, DEFAULT_MAX_PRODUCT_PACKAGING_MALUS,
    DEFAULT_MAX_RECIPE_BONUS, DEFAULT_THREATENED_MALUS, DEFAULT_TRANSPORT_FACTOR,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, ReferenceConfig, ScoreConfig,
    ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option accepted in `.green-score.yaml`, for editor
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
