//! Pipeline orchestration for recipe scoring.
//!
//! Shared load → resolve → score → report steps used by the CLI command
//! handlers.

mod load;
mod output;
mod report_stage;

pub use load::{load_catalog_with_context, load_recipe_with_context, LoadedRecipe};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse the reference data
    #[error("Loading reference data from {path} failed: {source}")]
    CatalogFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Failed to read, parse or resolve a recipe
    #[error("Loading recipe {path} failed: {source}")]
    RecipeFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The green score is below the requested minimum
    pub const BELOW_THRESHOLD: i32 = 1;
    /// Strict mode and some reference lookups failed
    pub const LOOKUP_FAILED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::BELOW_THRESHOLD,
            exit_codes::LOOKUP_FAILED,
            exit_codes::ERROR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(exit_codes::SUCCESS, 0);
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::RecipeFailed {
            path: "salade.yaml".to_string(),
            source: anyhow::anyhow!("bad"),
        };
        assert_eq!(err.to_string(), "Loading recipe salade.yaml failed: bad");
    }
}
