//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::types::signed;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::Recipe;
use crate::scoring::{GreenScoreGrade, RecipeScore};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Terminal color of a grade.
const fn grade_color(grade: GreenScoreGrade) -> &'static str {
    match grade {
        GreenScoreGrade::APlus | GreenScoreGrade::A => "green",
        GreenScoreGrade::B | GreenScoreGrade::C => "yellow",
        GreenScoreGrade::D | GreenScoreGrade::E | GreenScoreGrade::F => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        score: &RecipeScore,
        recipe: &Recipe,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        let title = recipe.name.as_deref().map_or_else(
            || "Green Score Summary".to_string(),
            |name| format!("Green Score Summary: {name}"),
        );
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        // Products
        lines.push(self.color("Products", "cyan"));
        let mut any_product = false;
        for product in score.included_products() {
            any_product = true;
            let name = product.category.as_deref().unwrap_or("-");
            lines.push(format!("  {name:<30} {} kg", product.quantity));
            lines.push(format!(
                "    base {:.1}  production {}  transport {}  packaging {}",
                product.base_score,
                signed(product.bonus.production, 1),
                signed(product.bonus.transport, 1),
                signed(product.bonus.packaging, 1),
            ));
        }
        if !any_product {
            lines.push(self.color("  (no scored product)", "dim"));
        }
        lines.push(String::new());

        // Recipe
        let green = score.green_score;
        lines.push(self.color("Recipe", "cyan"));
        lines.push(format!(
            "  {} {} / 100  {}  {}",
            self.color("Green score:", "bold"),
            self.color(&format!("{:.1}", green.value), "bold"),
            self.color(&format!("[{}]", green.letter), grade_color(green.letter)),
            green.letter.description(),
        ));
        lines.push(format!("  Base score:               {:.1}", score.base_score));
        lines.push(format!(
            "  Mean product base score:  {:.1}",
            score.mean_base_score
        ));
        lines.push(format!(
            "  Production bonus:         {}",
            signed(score.bonus.production, 0)
        ));
        lines.push(format!(
            "  Transport bonus:          {}",
            signed(score.bonus.transport, 0)
        ));
        lines.push(format!(
            "  Packaging malus:          {}",
            signed(score.bonus.packaging, 0)
        ));
        lines.push(format!(
            "  Threatened species malus: {}",
            signed(score.bonus.species_threatened, 0)
        ));
        let total = score.total_bonus;
        if total < score.bonus.total() {
            lines.push(self.color(
                &format!("  Bonuses capped at {}", signed(total, 0)),
                "dim",
            ));
        }

        // Warnings
        if !config.warnings.is_empty() {
            lines.push(String::new());
            lines.push(self.color(&format!("Warnings ({})", config.warnings.len()), "yellow"));
            for warning in &config.warnings {
                lines.push(format!("  {} {warning}", self.color("!", "yellow")));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductCategory, ProductLabel};
    use crate::scoring::RecipeScorer;

    fn scored() -> (RecipeScore, Recipe) {
        let mut recipe = Recipe::named("Salade");
        recipe
            .add_product(
                Product::new("a")
                    .with_category(ProductCategory::new(0, "Tomate", 0.5))
                    .with_quantity(1.0)
                    .unwrap()
                    .with_label(ProductLabel::new("AB", 5.0)),
            )
            .unwrap();
        recipe
            .add_product(
                Product::new("b")
                    .with_category(ProductCategory::new(1, "Sucre", 2.0))
                    .with_active(false),
            )
            .unwrap();
        let score = RecipeScorer::default().compute_full_scores(&recipe);
        (score, recipe)
    }

    #[test]
    fn test_summary_lists_included_products() {
        let (score, recipe) = scored();
        let report = SummaryReporter::new()
            .no_color()
            .generate(&score, &recipe, &ReportConfig::default())
            .unwrap();

        assert!(report.contains("Green Score Summary: Salade"));
        assert!(report.contains("Tomate"));
        assert!(!report.contains("Sucre"));
        assert!(report.contains("production +5.0"));
        assert!(report.contains("Production bonus:         +5"));
        assert!(!report.contains("\x1b["));
    }

    #[test]
    fn test_summary_shows_warnings() {
        let (score, recipe) = scored();
        let config =
            ReportConfig::default().with_warnings(vec!["product c: Unknown label 'X'".to_string()]);
        let report = SummaryReporter::new()
            .no_color()
            .generate(&score, &recipe, &config)
            .unwrap();
        assert!(report.contains("Warnings (1)"));
        assert!(report.contains("Unknown label 'X'"));
    }

    #[test]
    fn test_cap_note_uses_stored_total() {
        let (mut score, recipe) = scored();
        score.total_bonus = 2.0;
        let report = SummaryReporter::new()
            .no_color()
            .generate(&score, &recipe, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("Bonuses capped at +2"));
    }

    #[test]
    fn test_colored_grade() {
        let (score, recipe) = scored();
        let report = SummaryReporter::new()
            .generate(&score, &recipe, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("\x1b["));
    }
}
