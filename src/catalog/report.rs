//! Summary of a catalog load.

use super::ReferenceCatalog;
use crate::error::ReferenceKind;
use serde::Serialize;
use std::path::Path;

/// Record counts and the anomalies skipped while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogLoadReport {
    pub categories: usize,
    pub labels: usize,
    pub countries: usize,
    pub fao_zones: usize,
    pub packagings: usize,
    pub threatened_species: usize,

    /// Category names seen more than once (later entries dropped)
    pub duplicate_categories: Vec<String>,
    /// Categories dropped for lacking impact points
    pub categories_without_score: Vec<String>,
    pub duplicate_countries: Vec<String>,
    /// Countries with a null origin or transport score
    pub countries_missing_values: Vec<String>,
    /// Countries known only from the transport file
    pub countries_without_origin: Vec<String>,
    /// Countries known only from the origin file
    pub countries_without_transport: Vec<String>,
}

impl CatalogLoadReport {
    pub(crate) fn fill_counts(&mut self, catalog: &ReferenceCatalog) {
        for (kind, count) in catalog.counts() {
            match kind {
                ReferenceKind::Category => self.categories = count,
                ReferenceKind::Label => self.labels = count,
                ReferenceKind::Country => self.countries = count,
                ReferenceKind::FaoZone => self.fao_zones = count,
                ReferenceKind::Packaging => self.packagings = count,
                ReferenceKind::ThreatenedSpecies => self.threatened_species = count,
            }
        }
    }

    /// Number of recorded anomalies across all datasets.
    #[must_use]
    pub fn anomaly_count(&self) -> usize {
        self.anomalies().iter().map(|(_, names)| names.len()).sum()
    }

    /// Anomaly lists with a short description, in a fixed order.
    #[must_use]
    pub fn anomalies(&self) -> [(&'static str, &[String]); 6] {
        [
            ("duplicate categories", self.duplicate_categories.as_slice()),
            ("categories without score", self.categories_without_score.as_slice()),
            ("duplicate countries", self.duplicate_countries.as_slice()),
            ("countries with missing values", self.countries_missing_values.as_slice()),
            ("countries without origin score", self.countries_without_origin.as_slice()),
            (
                "countries without transport score",
                self.countries_without_transport.as_slice(),
            ),
        ]
    }

    pub(crate) fn log(&self, dir: &Path) {
        tracing::info!(
            "Loaded reference data from {}: {} categories, {} labels, {} countries, {} FAO zones, {} packagings, {} threatened species",
            dir.display(),
            self.categories,
            self.labels,
            self.countries,
            self.fao_zones,
            self.packagings,
            self.threatened_species
        );
        for (description, names) in self.anomalies() {
            if !names.is_empty() {
                tracing::debug!("{} {}: {}", names.len(), description, names.join(", "));
            }
        }
    }
}
