//! Score command handler.
//!
//! Implements the `score` subcommand: load reference data, resolve a recipe,
//! score it and write the report.

use crate::config::{ScoreConfig, Validatable};
use crate::error::GreenScoreError;
use crate::pipeline::{
    exit_codes, load_catalog_with_context, load_recipe_with_context, output_report,
};
use crate::scoring::RecipeScorer;
use anyhow::Result;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(GreenScoreError::config(messages.join("; ")).into());
    }

    let quiet = config.behavior.quiet;
    let (catalog, _report) = load_catalog_with_context(&config.data_dir, quiet)?;
    let loaded = load_recipe_with_context(&config.recipe_path, &catalog, quiet)?;

    let scorer = RecipeScorer::new(config.scoring.clone());
    let score = scorer.compute_full_scores(&loaded.recipe);

    if !quiet {
        tracing::info!(
            "Green score {:.1} ({})",
            score.green_score.value,
            score.green_score.letter
        );
    }

    output_report(&config, &score, &loaded.recipe, loaded.warning_messages())?;

    if config.behavior.strict_lookups && !loaded.warnings.is_empty() {
        tracing::error!(
            "{} reference lookups failed ({} unknown names)",
            loaded.warnings.len(),
            loaded.lookup_failures()
        );
        return Ok(exit_codes::LOOKUP_FAILED);
    }

    if let Some(threshold) = config.behavior.min_score {
        if score.green_score.value < threshold {
            tracing::error!(
                "Green score {:.1} is below minimum threshold {:.1}",
                score.green_score.value,
                threshold
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}
