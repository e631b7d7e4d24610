//! Property-based tests for the scoring formulas.
//!
//! Ensures the transforms stay in range for arbitrary inputs and that the
//! aggregation invariants hold across random recipes.

use green_score::model::{Product, ProductCategory, ProductLabel, ProductPackaging, Recipe};
use green_score::scoring::{base_score_from_points, clamp_score, GreenScoreGrade, RecipeScorer};
use green_score::ScoringConfig;
use proptest::prelude::*;

fn recipe_of(items: &[(f64, f64, bool)]) -> Recipe {
    Recipe::from_products(items.iter().enumerate().map(|(i, &(agb, quantity, active))| {
        Product::new(format!("p{i}"))
            .with_category(ProductCategory::new(i, format!("Cat {i}"), agb))
            .with_quantity(quantity)
            .unwrap()
            .with_active(active)
    }))
    .unwrap()
}

/// Position from best (0) to worst (6).
fn rank(grade: GreenScoreGrade) -> usize {
    GreenScoreGrade::all()
        .iter()
        .position(|g| *g == grade)
        .unwrap_or(usize::MAX)
}

proptest! {
    // Formula checks are cheap, so use a broad sample.
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn base_score_in_range(points in proptest::num::f64::ANY) {
        let score = base_score_from_points(points);
        prop_assert!((0.0..=100.0).contains(&score), "{} -> {}", points, score);
    }

    #[test]
    fn base_score_non_increasing(a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(base_score_from_points(low) >= base_score_from_points(high) - 1e-9);
    }

    #[test]
    fn clamp_is_idempotent(value in -1000.0f64..1000.0) {
        let once = clamp_score(value);
        prop_assert_eq!(clamp_score(once), once);
        prop_assert!((0.0..=100.0).contains(&once));
    }

    #[test]
    fn every_score_has_a_grade(value in proptest::num::f64::ANY) {
        let grade = GreenScoreGrade::from_score(value);
        prop_assert!(GreenScoreGrade::all().contains(&grade));
    }

    #[test]
    fn grade_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(GreenScoreGrade::from_score(high)) <= rank(GreenScoreGrade::from_score(low)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn equal_points_ignore_masses(
        agb in 0.0f64..5.0,
        masses in prop::collection::vec(0.01f64..10.0, 1..8),
    ) {
        let items: Vec<_> = masses.iter().map(|&m| (agb, m, true)).collect();
        let score = RecipeScorer::default().compute_full_scores(&recipe_of(&items));

        let expected = base_score_from_points(agb);
        prop_assert!((score.base_score - expected).abs() < 1e-6);
        prop_assert!((score.mean_base_score - expected).abs() < 1e-6);
    }

    #[test]
    fn green_score_always_in_range(
        items in prop::collection::vec((0.0f64..10.0, 0.01f64..5.0, any::<bool>()), 0..10),
    ) {
        let score = RecipeScorer::default().compute_full_scores(&recipe_of(&items));
        prop_assert!((0.0..=100.0).contains(&score.green_score.value));
        prop_assert_eq!(
            score.green_score.letter,
            GreenScoreGrade::from_score(score.green_score.value)
        );
        prop_assert!(score.included_products().all(|p| p.quantity >= 0.0));
    }

    #[test]
    fn inactive_products_do_not_move_the_score(
        items in prop::collection::vec((0.0f64..10.0, 0.01f64..5.0), 1..6),
        extra in (0.0f64..10.0, 0.01f64..5.0),
    ) {
        let mut active: Vec<_> = items.iter().map(|&(a, m)| (a, m, true)).collect();
        let before = RecipeScorer::default().compute_full_scores(&recipe_of(&active));

        active.push((extra.0, extra.1, false));
        let after = RecipeScorer::default().compute_full_scores(&recipe_of(&active));

        prop_assert_eq!(before.green_score.value, after.green_score.value);
        prop_assert_eq!(before.total_mass, after.total_mass);
    }

    #[test]
    fn label_bonus_never_exceeds_cap(bonuses in prop::collection::vec(0.0f64..30.0, 0..6)) {
        let mut product = Product::new("p")
            .with_category(ProductCategory::new(0, "Cat", 1.0));
        for (i, bonus) in bonuses.iter().enumerate() {
            product.add_label(ProductLabel::new(format!("Label {i}"), *bonus));
        }
        let config = ScoringConfig::default();
        let scorer = RecipeScorer::new(config.clone());
        let bonus = scorer.product_scorer().production_bonus(&product);
        prop_assert!(bonus <= config.max_product_label_bonus + 1e-9);
    }

    #[test]
    fn packaging_malus_never_below_floor(maluses in prop::collection::vec(-15.0f64..0.0, 0..6)) {
        let mut product = Product::new("p");
        for (i, malus) in maluses.iter().enumerate() {
            product.add_packaging(ProductPackaging::new(format!("Pack {i}"), *malus));
        }
        let config = ScoringConfig::default();
        let bonus = RecipeScorer::new(config.clone())
            .product_scorer()
            .packaging_bonus(&product);
        prop_assert!(bonus >= config.max_product_packaging_malus - 1e-9);
    }

    #[test]
    fn palm_oil_malus_applied_once(count in 1usize..5, certified in any::<bool>()) {
        let recipe = Recipe::from_products((0..count).map(|i| {
            Product::new(format!("p{i}"))
                .with_category(ProductCategory::new(i, "Huile", 1.0))
                .with_quantity(0.1)
                .unwrap()
                .with_palm_oil(true, certified)
        }))
        .unwrap();

        let malus = RecipeScorer::default().threat_malus(&recipe);
        let expected = if certified { 0.0 } else { ScoringConfig::default().threatened_malus };
        prop_assert_eq!(malus, expected);
    }
}
