#![no_main]
use green_score::catalog::ReferenceCatalog;
use green_score::model::{Country, FaoIds, FaoZone, ThreatenedSpecies};
use green_score::parsers::{parse_recipe_str, DocumentFormat};
use green_score::scoring::RecipeScorer;
use libfuzzer_sys::fuzz_target;

/// Fuzz recipe parsing, resolution and scoring end to end.
///
/// Any document that parses must resolve and score without panicking,
/// and the resulting green score must stay in range.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = parse_recipe_str(s, DocumentFormat::sniff(s)) else {
        return;
    };

    let catalog = ReferenceCatalog::builder()
        .category("Tomate", 0.25)
        .category("Thon", 1.4)
        .label("MSC", 6.0)
        .country(Country::new("France").with_origin_score(100.0).with_transport_score(90.0))
        .fao_zone(FaoZone::new(37, "Méditerranée").with_transport_score(80.0))
        .packaging("Verre", -2.0)
        .threatened_species(ThreatenedSpecies::new("Thon rouge", FaoIds::zones([37])))
        .build();

    if let Ok(resolved) = document.resolve(&catalog) {
        let score = RecipeScorer::default().compute_full_scores(&resolved.recipe);
        assert!((0.0..=100.0).contains(&score.green_score.value));
    }
});
