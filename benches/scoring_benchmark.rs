//! Benchmarks for recipe scoring.
//!
//! Run with: cargo bench --bench scoring_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use green_score::model::{
    Country, Product, ProductCategory, ProductLabel, ProductPackaging, Recipe,
};
use green_score::scoring::{base_score_from_points, RecipeScorer};
use std::hint::black_box;

/// Generate a recipe with `count` fully attributed products.
fn generate_recipe(count: usize) -> Recipe {
    let france = Country::new("France")
        .with_origin_score(100.0)
        .with_transport_score(90.0);

    Recipe::from_products((0..count).map(|i| {
        let mut product = Product::new(format!("product-{i}"))
            .with_category(ProductCategory::new(i, format!("Category {i}"), (i % 40) as f64 / 10.0))
            .with_quantity(0.05 + (i % 7) as f64 / 10.0)
            .expect("positive quantity")
            .with_origin(france.clone())
            .with_packaging(ProductPackaging::new("Verre", -2.0))
            .with_palm_oil(i % 50 == 0, true);
        if i % 3 == 0 {
            product.add_label(ProductLabel::new("Agriculture biologique", 10.0));
            product.add_label(ProductLabel::new("MSC", 6.0));
        }
        product
    }))
    .expect("unique ids")
}

fn bench_base_score(c: &mut Criterion) {
    c.bench_function("base_score_from_points", |b| {
        b.iter(|| base_score_from_points(black_box(1.4)));
    });
}

fn bench_recipe_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_scaling");
    let scorer = RecipeScorer::default();

    for size in &[10, 100, 1000] {
        let recipe = generate_recipe(*size);
        group.bench_with_input(BenchmarkId::new("compute_full_scores", size), size, |b, _| {
            b.iter(|| black_box(scorer.compute_full_scores(black_box(&recipe))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_base_score, bench_recipe_scaling);
criterion_main!(benches);
