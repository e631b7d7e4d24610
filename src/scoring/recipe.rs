//! Recipe aggregation: mass-weighted scores, threat malus and final grade.

use super::formula::{base_score_from_points, clamp_score, GreenScoreGrade, SCORE_RANGE};
use super::product::{ProductScore, ProductScorer};
use crate::config::ScoringConfig;
use crate::model::{Product, ProductId, Recipe};
use serde::{Deserialize, Serialize};

/// Recipe-level bonus breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeBonus {
    pub production: f64,
    pub transport: f64,
    pub packaging: f64,
    /// Kept for display; nothing feeds it and it is not summed
    pub season: f64,
    pub species_threatened: f64,
}

impl RecipeBonus {
    /// Sum of the bonuses that count towards the green score, before capping.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.production + self.transport + self.packaging + self.species_threatened
    }
}

/// Final value and letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreenScore {
    pub letter: GreenScoreGrade,
    pub value: f64,
}

impl GreenScore {
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        let value = clamp_score(value);
        Self {
            letter: GreenScoreGrade::from_score(value),
            value,
        }
    }
}

/// Score snapshot of a whole recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeScore {
    /// Score of the mass-weighted impact points
    pub base_score: f64,
    /// Mass-weighted mean of the product base scores
    pub mean_base_score: f64,
    pub bonus: RecipeBonus,
    /// Sum of bonuses after the recipe cap
    pub total_bonus: f64,
    pub green_score: GreenScore,
    /// Total mass of the scored products, in kg
    pub total_mass: f64,
    /// Every product of the recipe, in recipe order
    pub products: Vec<ProductScore>,
}

impl RecipeScore {
    /// Snapshot of one product, by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&ProductScore> {
        self.products.iter().find(|p| &p.product_id == id)
    }

    /// Products that took part in the aggregates.
    pub fn included_products(&self) -> impl Iterator<Item = &ProductScore> {
        self.products.iter().filter(|p| p.included)
    }
}

/// Scores recipes. Holds the constants and a [`ProductScorer`] sharing them.
#[derive(Debug, Clone, Default)]
pub struct RecipeScorer {
    products: ProductScorer,
}

impl RecipeScorer {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self {
            products: ProductScorer::new(config),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        self.products.config()
    }

    #[must_use]
    pub const fn product_scorer(&self) -> &ProductScorer {
        &self.products
    }

    /// Score every product and aggregate them into a [`RecipeScore`].
    ///
    /// Only active products with a category carry mass. The threat malus
    /// looks at every product. A recipe without mass gets a perfect base
    /// score and no weighted bonuses.
    #[must_use]
    pub fn compute_full_scores(&self, recipe: &Recipe) -> RecipeScore {
        let config = self.config();
        let products: Vec<ProductScore> = recipe
            .products()
            .map(|product| self.products.score(product))
            .collect();

        let included: Vec<(&Product, f64, &ProductScore)> = recipe
            .products()
            .zip(&products)
            .filter_map(|(product, score)| {
                let category = product.category().filter(|_| product.is_active());
                if category.is_none() {
                    tracing::trace!("Product {} excluded from aggregates", product.id());
                }
                category.map(|c| (product, c.agb_score, score))
            })
            .collect();

        // Weights are relative to the heaviest product so the sums stay finite
        let heaviest = included
            .iter()
            .map(|(product, _, _)| product.quantity())
            .fold(0.0_f64, f64::max);

        let mut total_mass = 0.0;
        let mut total_weight = 0.0;
        let mut weighted_points = 0.0;
        let mut weighted_base = 0.0;
        let mut weighted_production = 0.0;
        let mut weighted_transport = 0.0;
        let mut weighted_packaging = 0.0;

        for (product, agb_score, score) in &included {
            let mass = product.quantity();
            let weight = mass / heaviest;
            total_mass += mass;
            total_weight += weight;
            weighted_points += agb_score * weight;
            weighted_base += score.base_score * weight;
            weighted_production += score.bonus.production * weight;
            weighted_transport += score.bonus.transport * weight;
            weighted_packaging += score.bonus.packaging * weight;
        }

        let species_threatened = self.threat_malus(recipe);

        let (base_score, mean_base_score, production, transport, packaging) =
            if total_weight > 0.0 {
                (
                    base_score_from_points(weighted_points / total_weight),
                    weighted_base / total_weight,
                    weighted_production / total_weight,
                    weighted_transport / total_weight,
                    weighted_packaging / total_weight,
                )
            } else {
                (SCORE_RANGE.1, SCORE_RANGE.1, 0.0, 0.0, 0.0)
            };

        let bonus = RecipeBonus {
            production,
            transport,
            packaging,
            season: 0.0,
            species_threatened,
        };
        let total_bonus = bonus.total().min(config.max_recipe_bonus);
        let green_score = GreenScore::from_value(base_score + total_bonus);

        tracing::debug!(
            products = products.len(),
            total_mass,
            base_score,
            total_bonus,
            grade = %green_score.letter,
            "Scored recipe: {:.1} ({})",
            green_score.value,
            green_score.letter
        );

        RecipeScore {
            base_score,
            mean_base_score,
            bonus,
            total_bonus,
            green_score,
            total_mass,
            products,
        }
    }

    /// Malus for uncertified palm oil or a threatened species, applied once.
    #[must_use]
    pub fn threat_malus(&self, recipe: &Recipe) -> f64 {
        if recipe.products().any(is_threatening) {
            self.config().threatened_malus
        } else {
            0.0
        }
    }
}

/// Whether a product triggers the threatened-species malus.
///
/// Species tied to specific zones only count when the product comes from
/// one of them.
fn is_threatening(product: &Product) -> bool {
    if product.has_uncertified_palm_oil() {
        return true;
    }
    let zone = product.origin().and_then(|origin| origin.fao_id());
    product.threatened_species().iter().any(|species| {
        species.fao_ids.is_all() || zone.is_some_and(|id| species.fao_ids.contains(id))
    })
}
