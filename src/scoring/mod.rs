//! Green score engine.
//!
//! Turns a [`Recipe`](crate::model::Recipe) into a [`RecipeScore`]:
//!
//! - **Base score**: impact points mapped to `[0, 100]` by
//!   [`base_score_from_points`]
//! - **Product bonuses**: labels or origin, transport, packaging
//! - **Recipe aggregation**: mass-weighted means over active products, a
//!   single malus for palm oil or threatened species, capped bonus sum
//! - **Grade**: [`GreenScoreGrade`] from A+ to F
//!
//! # Usage
//!
//! ```
//! use green_score::model::{Product, ProductCategory, Recipe};
//! use green_score::scoring::{GreenScoreGrade, RecipeScorer};
//!
//! let tomato = Product::new("tomato")
//!     .with_category(ProductCategory::new(0, "Tomate", 0.5))
//!     .with_quantity(1.0)
//!     .unwrap();
//! let recipe = Recipe::from_products([tomato]).unwrap();
//!
//! let score = RecipeScorer::default().compute_full_scores(&recipe);
//! assert_eq!(score.green_score.letter, GreenScoreGrade::C);
//! ```

mod formula;
mod product;
mod recipe;

pub use formula::{base_score_from_points, clamp_score, GreenScoreGrade, SCORE_RANGE};
pub use product::{ProductBonus, ProductScore, ProductScorer};
pub use recipe::{GreenScore, RecipeBonus, RecipeScore, RecipeScorer};
