//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::model::Recipe;
use crate::scoring::RecipeScore;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        score: &RecipeScore,
        recipe: &Recipe,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonScoreReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                source: &config.metadata,
            },
            recipe: recipe.name.as_deref(),
            score,
            warnings: &config.warnings,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonScoreReport<'a> {
    metadata: JsonReportMetadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipe: Option<&'a str>,
    score: &'a RecipeScore,
    warnings: &'a [String],
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(flatten)]
    source: &'a ReportMetadata,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}
