//! Report generation for recipe scores.
//!
//! Output formats:
//! - Summary: compact terminal output, optionally colored
//! - JSON: the full score snapshot with tool metadata
//! - Markdown: product and recipe tables
//!
//! Names from reference data are free text; the `escape` module makes them
//! safe to embed in Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{signed, ReportConfig, ReportFormat, ReportMetadata};

use crate::model::Recipe;
use crate::scoring::RecipeScore;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a recipe score.
    fn generate(
        &self,
        score: &RecipeScore,
        recipe: &Recipe,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        score: &RecipeScore,
        recipe: &Recipe,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(score, recipe, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RecipeScorer;

    #[test]
    fn test_create_reporter_formats() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_report() {
        let recipe = Recipe::new();
        let score = RecipeScorer::default().compute_full_scores(&recipe);
        let mut buffer = Vec::new();
        create_reporter_with_options(ReportFormat::Summary, false)
            .write_report(&score, &recipe, &ReportConfig::default(), &mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Green score:"));
    }
}
