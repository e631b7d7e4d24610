//! Catalog command handler.
//!
//! Loads a reference directory and prints what was loaded and skipped.

use crate::catalog::CatalogLoadReport;
use crate::pipeline::{exit_codes, load_catalog_with_context, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Run the catalog command, returning the desired exit code.
pub fn run_catalog(
    data_dir: &Path,
    format: ReportFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let (_catalog, report) = load_catalog_with_context(data_dir, quiet)?;

    let text = match format {
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
        ReportFormat::Summary | ReportFormat::Markdown => format_load_report(data_dir, &report),
    };

    write_output(&text, &OutputTarget::from_option(output_file), quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// Plain-text rendering of a load report.
fn format_load_report(data_dir: &Path, report: &CatalogLoadReport) -> String {
    let mut lines = vec![format!("Reference data: {}", data_dir.display())];
    lines.push(format!("  categories:         {}", report.categories));
    lines.push(format!("  labels:             {}", report.labels));
    lines.push(format!("  countries:          {}", report.countries));
    lines.push(format!("  FAO zones:          {}", report.fao_zones));
    lines.push(format!("  packagings:         {}", report.packagings));
    lines.push(format!("  threatened species: {}", report.threatened_species));

    if report.anomaly_count() > 0 {
        lines.push(String::new());
        lines.push(format!("Skipped or incomplete ({}):", report.anomaly_count()));
        for (description, names) in report.anomalies() {
            if !names.is_empty() {
                lines.push(format!("  {description}: {}", names.join(", ")));
            }
        }
    }

    lines.join("\n")
}
