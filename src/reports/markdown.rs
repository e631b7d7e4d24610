//! Markdown report generator.

use super::escape::{escape_markdown, MarkdownContext};
use super::types::signed;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::Recipe;
use crate::scoring::RecipeScore;
use std::fmt::Write;

/// Markdown reporter: one table of products, one table of recipe scores.
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        score: &RecipeScore,
        recipe: &Recipe,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        match &recipe.name {
            Some(name) => writeln!(
                md,
                "# Green score: {}\n",
                escape_markdown(name, MarkdownContext::Inline)
            )?,
            None => writeln!(md, "# Green score\n")?,
        }

        let green = score.green_score;
        writeln!(
            md,
            "**{:.1} / 100** (grade **{}**, {})\n",
            green.value,
            green.letter,
            green.letter.description()
        )?;

        if let Some(path) = &config.metadata.recipe_path {
            writeln!(md, "Recipe: {}\n", code_span(path))?;
        }

        writeln!(md, "## Products\n")?;
        writeln!(
            md,
            "| Category | Quantity (kg) | Base score | Production | Transport | Packaging |"
        )?;
        writeln!(md, "|---|---:|---:|---:|---:|---:|")?;
        for product in score.included_products() {
            writeln!(
                md,
                "| {} | {} | {:.1} | {} | {} | {} |",
                escape_markdown(
                    product.category.as_deref().unwrap_or("-"),
                    MarkdownContext::Table
                ),
                product.quantity,
                product.base_score,
                signed(product.bonus.production, 1),
                signed(product.bonus.transport, 1),
                signed(product.bonus.packaging, 1),
            )?;
        }

        writeln!(md, "\n## Recipe\n")?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|---|---:|")?;
        writeln!(md, "| Base score | {:.1} |", score.base_score)?;
        writeln!(md, "| Mean product base score | {:.1} |", score.mean_base_score)?;
        writeln!(md, "| Production bonus | {} |", signed(score.bonus.production, 0))?;
        writeln!(md, "| Transport bonus | {} |", signed(score.bonus.transport, 0))?;
        writeln!(md, "| Packaging malus | {} |", signed(score.bonus.packaging, 0))?;
        writeln!(
            md,
            "| Threatened species malus | {} |",
            signed(score.bonus.species_threatened, 0)
        )?;
        writeln!(
            md,
            "| Total bonus (capped) | {} |",
            signed(score.total_bonus, 1)
        )?;

        if !config.warnings.is_empty() {
            writeln!(md, "\n## Warnings\n")?;
            for warning in &config.warnings {
                writeln!(md, "- {}", escape_markdown(warning, MarkdownContext::Inline))?;
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

/// Wrap text in a code span whose fence is longer than any backtick run inside.
///
/// Backslash escapes are literal inside code spans, so the text is kept as is.
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}
