//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → resolve → score → report pipeline,
//! error handling paths, and CLI command handlers with real fixture files.

use green_score::cli::{run_catalog, run_score};
use green_score::config::{AppConfig, ScoreConfig};
use green_score::pipeline::{
    exit_codes, load_catalog_with_context, load_recipe_with_context, output_report, PipelineError,
};
use green_score::reports::ReportFormat;
use green_score::scoring::RecipeScorer;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

/// Score config writing `format` into a file under `tmp`.
fn score_config(recipe: &str, format: ReportFormat, tmp: &TempDir) -> ScoreConfig {
    let app = AppConfig::builder()
        .data_dir(Some(fixture_path("reference")))
        .output_format(format)
        .output_file(Some(tmp.path().join("report.out")))
        .quiet(true)
        .build();
    ScoreConfig::from_app_config(fixture_path(recipe), app)
}

fn read_report(tmp: &TempDir) -> String {
    std::fs::read_to_string(tmp.path().join("report.out")).expect("report should be written")
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn load_fixture_catalog() {
        let (catalog, report) =
            load_catalog_with_context(&fixture_path("reference"), true).expect("load should work");
        assert_eq!(catalog.categories().count(), 5);
        assert_eq!(report.anomaly_count(), 4);
    }

    #[test]
    fn load_catalog_error_names_directory() {
        let err = load_catalog_with_context(Path::new("/nonexistent/reference"), true)
            .expect_err("missing directory should fail");
        let pipeline_err = err
            .downcast_ref::<PipelineError>()
            .expect("should be a PipelineError");
        assert!(matches!(pipeline_err, PipelineError::CatalogFailed { .. }));
        assert!(err.to_string().contains("/nonexistent/reference"));
    }

    #[test]
    fn load_recipe_collects_warnings() {
        let (catalog, _) = load_catalog_with_context(&fixture_path("reference"), true).unwrap();
        let loaded =
            load_recipe_with_context(&fixture_path("recipes/typos.yaml"), &catalog, true).unwrap();

        assert_eq!(loaded.warnings.len(), 2);
        assert_eq!(loaded.lookup_failures(), 2);
        assert_eq!(loaded.warning_messages().len(), 2);
        assert_eq!(loaded.recipe.len(), 2);
    }

    #[test]
    fn load_recipe_error_is_typed() {
        let (catalog, _) = load_catalog_with_context(&fixture_path("reference"), true).unwrap();
        let err = load_recipe_with_context(Path::new("/nonexistent/recipe.yaml"), &catalog, true)
            .expect_err("missing recipe should fail");
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::RecipeFailed { .. })
        ));
    }
}

// ============================================================================
// Report Stage Tests
// ============================================================================

mod report_stage {
    use super::*;

    #[test]
    fn output_report_writes_markdown() {
        let tmp = TempDir::new().unwrap();
        let config = score_config("recipes/ratatouille.yaml", ReportFormat::Markdown, &tmp);

        let (catalog, _) = load_catalog_with_context(&config.data_dir, true).unwrap();
        let loaded = load_recipe_with_context(&config.recipe_path, &catalog, true).unwrap();
        let score = RecipeScorer::new(config.scoring.clone()).compute_full_scores(&loaded.recipe);

        output_report(&config, &score, &loaded.recipe, Vec::new()).unwrap();

        let report = read_report(&tmp);
        assert!(report.contains("Ratatouille"));
        assert!(report.contains("A+"));
        // Files never get ANSI escapes
        assert!(!report.contains('\x1b'));
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handlers {
    use super::*;

    #[test]
    fn score_success_writes_json() {
        let tmp = TempDir::new().unwrap();
        let config = score_config("recipes/ratatouille.yaml", ReportFormat::Json, &tmp);

        let code = run_score(config).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value = serde_json::from_str(&read_report(&tmp)).unwrap();
        assert_eq!(value["recipe"], "Ratatouille");
        assert_eq!(value["score"]["green_score"]["letter"], "A+");
        assert_eq!(value["score"]["green_score"]["value"], 100.0);
        assert!(value["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn score_below_threshold() {
        let tmp = TempDir::new().unwrap();
        let mut config = score_config("recipes/typos.yaml", ReportFormat::Summary, &tmp);
        config.behavior.min_score = Some(10.0);

        assert_eq!(run_score(config).unwrap(), exit_codes::BELOW_THRESHOLD);
    }

    #[test]
    fn score_strict_lookups_take_precedence() {
        let tmp = TempDir::new().unwrap();
        let mut config = score_config("recipes/typos.yaml", ReportFormat::Json, &tmp);
        config.behavior.min_score = Some(10.0);
        config.behavior.strict_lookups = true;

        assert_eq!(run_score(config).unwrap(), exit_codes::LOOKUP_FAILED);

        // The report is still written before the exit code is decided
        let value: serde_json::Value = serde_json::from_str(&read_report(&tmp)).unwrap();
        assert_eq!(value["warnings"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn score_strict_without_warnings_succeeds() {
        let tmp = TempDir::new().unwrap();
        let mut config = score_config("recipes/thon.json", ReportFormat::Summary, &tmp);
        config.behavior.strict_lookups = true;

        assert_eq!(run_score(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn score_missing_recipe_is_error() {
        let tmp = TempDir::new().unwrap();
        let config = score_config("recipes/missing.yaml", ReportFormat::Summary, &tmp);
        assert!(run_score(config).is_err());
    }

    #[test]
    fn score_invalid_config_is_error() {
        let tmp = TempDir::new().unwrap();
        let mut config = score_config("recipes/ratatouille.yaml", ReportFormat::Summary, &tmp);
        config.behavior.min_score = Some(150.0);

        let err = run_score(config).expect_err("out of range min_score should fail");
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn catalog_json_report() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("catalog.json");

        let code = run_catalog(
            &fixture_path("reference"),
            ReportFormat::Json,
            Some(out.clone()),
            true,
        )
        .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["categories"], 5);
        assert_eq!(value["countries_without_origin"][0], "Japon");
    }

    #[test]
    fn catalog_summary_lists_anomalies() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("catalog.txt");

        run_catalog(
            &fixture_path("reference"),
            ReportFormat::Summary,
            Some(out.clone()),
            true,
        )
        .unwrap();

        let text = std::fs::read_to_string(out).unwrap();
        assert!(text.contains("categories:         5"));
        assert!(text.contains("Vide"));
    }
}
