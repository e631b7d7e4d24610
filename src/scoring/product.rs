//! Per-product scoring.

use super::formula::base_score_from_points;
use crate::config::ScoringConfig;
use crate::model::{Origin, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Bonus breakdown of a single product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductBonus {
    /// Labels, or the origin score when no label is set
    pub production: f64,
    pub transport: f64,
    /// Packaging malus, floored
    pub packaging: f64,
    /// Always 0 here: the malus is computed at recipe level
    pub species_threatened: f64,
}

impl ProductBonus {
    /// Sum of the per-product bonuses.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.production + self.transport + self.packaging + self.species_threatened
    }
}

/// Score snapshot of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductScore {
    pub product_id: ProductId,
    /// Category name, if the product has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Quantity in kg at scoring time
    pub quantity: f64,
    /// Whether the product took part in the recipe aggregates
    pub included: bool,
    /// Score of the category's impact points, 0 without category
    pub base_score: f64,
    pub bonus: ProductBonus,
}

/// Computes [`ProductScore`] snapshots with a given set of constants.
#[derive(Debug, Clone, Default)]
pub struct ProductScorer {
    config: ScoringConfig,
}

impl ProductScorer {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a product. Never fails: missing attributes count as zero.
    #[must_use]
    pub fn score(&self, product: &Product) -> ProductScore {
        ProductScore {
            product_id: product.id().clone(),
            category: product.category().map(|c| c.name.clone()),
            quantity: product.quantity(),
            included: product.is_scored(),
            base_score: self.base_score(product),
            bonus: ProductBonus {
                production: self.production_bonus(product),
                transport: self.transport_bonus(product),
                packaging: self.packaging_bonus(product),
                species_threatened: 0.0,
            },
        }
    }

    /// Base score of the product's category.
    #[must_use]
    pub fn base_score(&self, product: &Product) -> f64 {
        product
            .category()
            .map_or(0.0, |category| base_score_from_points(category.agb_score))
    }

    /// Label bonus, or the origin-derived bonus when the product has no label.
    ///
    /// Labels of the exclusive group do not cumulate: only the first one
    /// applied counts. The running sum is capped after every label.
    #[must_use]
    pub fn production_bonus(&self, product: &Product) -> f64 {
        let labels = product.labels();
        if labels.is_empty() {
            return match product.origin() {
                Some(Origin::Country(country)) => country
                    .origin_score
                    .map_or(0.0, |score| score / 10.0 - 5.0),
                _ => 0.0,
            };
        }

        let cap = self.config.max_product_label_bonus;
        let mut applied: Vec<&str> = Vec::with_capacity(labels.len());
        let mut bonus = 0.0_f64;

        for label in labels {
            if self.config.is_exclusive_label(&label.name)
                && applied.iter().any(|name| self.config.is_exclusive_label(name))
            {
                continue;
            }
            applied.push(&label.name);
            bonus = (bonus + label.bonus).min(cap);
        }

        bonus
    }

    #[must_use]
    pub fn transport_bonus(&self, product: &Product) -> f64 {
        product
            .origin()
            .and_then(Origin::transport_score)
            .map_or(0.0, |score| score * self.config.transport_factor)
    }

    /// Packaging malus, floored after every packaging.
    #[must_use]
    pub fn packaging_bonus(&self, product: &Product) -> f64 {
        let floor = self.config.max_product_packaging_malus;
        product
            .packagings()
            .iter()
            .fold(0.0, |sum, packaging| (sum + packaging.bonus).max(floor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Country, FaoZone, ProductCategory, ProductLabel, ProductPackaging};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn scorer() -> ProductScorer {
        ProductScorer::default()
    }

    #[test]
    fn test_base_score_from_category() {
        let product = Product::new("p").with_category(ProductCategory::new(0, "Tomate", 0.5));
        let score = scorer().score(&product);
        assert!((score.base_score - 53.4673).abs() < 1e-3);
        assert!(score.included);
        assert_eq!(score.category.as_deref(), Some("Tomate"));
    }

    #[test]
    fn test_uncategorized_product_scores_zero() {
        let score = scorer().score(&Product::new("p"));
        assert_eq!(score.base_score, 0.0);
        assert!(!score.included);
    }

    #[test]
    fn test_exclusive_labels_do_not_cumulate() {
        let product = Product::new("p")
            .with_label(ProductLabel::new("ASC", 10.0))
            .with_label(ProductLabel::new("MSC", 15.0));
        assert!(approx(scorer().production_bonus(&product), 10.0));
    }

    #[test]
    fn test_non_exclusive_labels_cumulate_and_cap() {
        let product = Product::new("p")
            .with_label(ProductLabel::new("AB", 15.0))
            .with_label(ProductLabel::new("Label Rouge", 10.0));
        assert!(approx(scorer().production_bonus(&product), 20.0));

        let mixed = Product::new("q")
            .with_label(ProductLabel::new("MSC", 5.0))
            .with_label(ProductLabel::new("AB", 5.0))
            .with_label(ProductLabel::new("ASC", 5.0));
        assert!(approx(scorer().production_bonus(&mixed), 10.0));
    }

    #[test]
    fn test_cap_applies_to_running_sum() {
        let product = Product::new("p")
            .with_label(ProductLabel::new("AB", 25.0))
            .with_label(ProductLabel::new("Malus", -5.0));
        assert!(approx(scorer().production_bonus(&product), 15.0));
    }

    #[test]
    fn test_origin_bonus_without_labels() {
        let product = Product::new("p").with_origin(Country::new("France").with_origin_score(80.0));
        assert!(approx(scorer().production_bonus(&product), 3.0));

        let no_score = Product::new("q").with_origin(Country::new("Inconnu"));
        assert_eq!(scorer().production_bonus(&no_score), 0.0);

        let sea = Product::new("r").with_origin(FaoZone::new(27, "Atlantique"));
        assert_eq!(scorer().production_bonus(&sea), 0.0);
    }

    #[test]
    fn test_labels_take_precedence_over_origin() {
        let product = Product::new("p")
            .with_origin(Country::new("France").with_origin_score(80.0))
            .with_label(ProductLabel::new("AB", 4.0));
        assert!(approx(scorer().production_bonus(&product), 4.0));
    }

    #[test]
    fn test_transport_bonus_for_both_origins() {
        let country =
            Product::new("p").with_origin(Country::new("France").with_transport_score(20.0));
        assert!(approx(scorer().transport_bonus(&country), 3.0));

        let zone = Product::new("q")
            .with_origin(FaoZone::new(27, "Atlantique").with_transport_score(-10.0));
        assert!(approx(scorer().transport_bonus(&zone), -1.5));

        assert_eq!(scorer().transport_bonus(&Product::new("r")), 0.0);
    }

    #[test]
    fn test_packaging_floor() {
        let product = Product::new("p")
            .with_packaging(ProductPackaging::new("Plastique", -8.0))
            .with_packaging(ProductPackaging::new("Barquette", -5.0));
        assert!(approx(scorer().packaging_bonus(&product), -10.0));

        let single = Product::new("q").with_packaging(ProductPackaging::new("Verre", -2.0));
        assert!(approx(scorer().packaging_bonus(&single), -2.0));
    }

    #[test]
    fn test_custom_constants() {
        let config = ScoringConfig {
            max_product_label_bonus: 5.0,
            transport_factor: 1.0,
            exclusive_labels: Vec::new(),
            ..ScoringConfig::default()
        };
        let product = Product::new("p")
            .with_label(ProductLabel::new("ASC", 3.0))
            .with_label(ProductLabel::new("MSC", 3.0))
            .with_origin(FaoZone::new(27, "Atlantique").with_transport_score(4.0));
        let score = ProductScorer::new(config).score(&product);
        assert!(approx(score.bonus.production, 5.0));
        assert!(approx(score.bonus.transport, 4.0));
    }

    #[test]
    fn test_species_threatened_is_zero_per_product() {
        let product = Product::new("p").with_palm_oil(true, false);
        assert_eq!(scorer().score(&product).bonus.species_threatened, 0.0);
    }
}
