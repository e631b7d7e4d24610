//! Report output stage.

use super::{should_use_color, write_output, OutputTarget, PipelineError};
use crate::config::ScoreConfig;
use crate::model::Recipe;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use crate::scoring::RecipeScore;
use anyhow::Result;

/// Render a score in the configured format and write it out.
pub fn output_report(
    config: &ScoreConfig,
    score: &RecipeScore,
    recipe: &Recipe,
    warnings: Vec<String>,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &output_target);

    let report_config = ReportConfig::default()
        .with_metadata(ReportMetadata {
            recipe_path: Some(config.recipe_path.to_string_lossy().to_string()),
            data_dir: Some(config.data_dir.to_string_lossy().to_string()),
        })
        .with_warnings(warnings);

    let reporter = create_reporter_with_options(config.output.format, use_color);
    let report = reporter
        .generate(score, recipe, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &output_target, config.behavior.quiet)
}
