//! Default values for the scoring engine.
//!
//! These are the values the engine uses when no config file or CLI flag
//! overrides them.

// ============================================================================
// Default Value Constants
// ============================================================================

/// Cap on a product's cumulated label bonus.
pub const DEFAULT_MAX_PRODUCT_LABEL_BONUS: f64 = 20.0;

/// Floor on a product's cumulated packaging malus.
pub const DEFAULT_MAX_PRODUCT_PACKAGING_MALUS: f64 = -10.0;

/// Cap on the sum of recipe bonuses before they are added to the base score.
pub const DEFAULT_MAX_RECIPE_BONUS: f64 = 20.0;

/// Malus for uncertified palm oil or a threatened species.
pub const DEFAULT_THREATENED_MALUS: f64 = -10.0;

/// Multiplier applied to an origin's transport score.
pub const DEFAULT_TRANSPORT_FACTOR: f64 = 0.15;

/// Labels whose bonuses cannot be cumulated on one product.
pub const DEFAULT_EXCLUSIVE_LABELS: &[&str] = &["ASC", "MSC"];
