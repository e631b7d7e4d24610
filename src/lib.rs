//! **A library for computing the environmental green score of food recipes.**
//!
//! `green-score` rates a recipe on a 0 to 100 scale and classifies the result
//! into a letter grade (A+ to F). Each product of the recipe carries a base
//! score derived from the environmental footprint of its food category, plus
//! bonuses and maluses for labels, origin, transport distance, packaging and
//! threatened species. The recipe score is the mass-weighted mean of its
//! products.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The domain types: [`Recipe`], [`Product`] and the reference
//!   records a product points at (categories, labels, origins, packagings).
//! - **[`catalog`]**: The [`ReferenceCatalog`], loaded once from a directory of
//!   JSON reference files and used to resolve names into records.
//! - **[`parsers`]**: Reads recipe documents (JSON or YAML) and resolves them
//!   against a catalog.
//! - **[`scoring`]**: The [`ProductScorer`] and [`RecipeScorer`] that turn a
//!   recipe into a [`RecipeScore`].
//! - **[`reports`]**: Summary, JSON and Markdown renderings of a score.
//! - **[`pipeline`]** and **[`cli`]**: The load, score and report steps the
//!   command-line tool is built from.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use green_score::{parse_recipe, ReferenceCatalog, RecipeScorer, ScoringConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (catalog, _report) = ReferenceCatalog::load_dir(Path::new("public"))?;
//!     let resolved = parse_recipe(Path::new("recipe.yaml"))?.resolve(&catalog)?;
//!
//!     let scorer = RecipeScorer::new(ScoringConfig::default());
//!     let score = scorer.compute_full_scores(&resolved.recipe);
//!
//!     println!(
//!         "{:.1} ({})",
//!         score.green_score.value, score.green_score.letter
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Building a Recipe in Code
//!
//! ```
//! use green_score::model::{ProductCategory, Product, Recipe};
//! use green_score::{GreenScoreGrade, RecipeScorer, ScoringConfig};
//!
//! // 200 g of tomatoes
//! let tomato = Product::new("tomato")
//!     .with_category(ProductCategory::new(1, "Tomate", 0.25))
//!     .with_quantity(0.2)
//!     .unwrap();
//! let recipe = Recipe::from_products([tomato]).unwrap();
//!
//! let score = RecipeScorer::new(ScoringConfig::default()).compute_full_scores(&recipe);
//! assert!((score.total_mass - 0.2).abs() < 1e-9);
//! assert_eq!(score.green_score.letter, GreenScoreGrade::A);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Masses and counts are converted to f64 for weighting
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use catalog::{CatalogLoadReport, ReferenceCatalog, ReferenceCatalogBuilder};
pub use config::{AppConfig, AppConfigBuilder, ScoreConfig, ScoringConfig};
pub use config::{BehaviorConfig, OutputConfig, ReferenceConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, GreenScoreError, Result};
pub use model::{Origin, Product, ProductId, Recipe};
pub use parsers::{parse_recipe, parse_recipe_str, DocumentFormat, RecipeDocument};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    GreenScore, GreenScoreGrade, ProductScore, ProductScorer, RecipeScore, RecipeScorer,
};
