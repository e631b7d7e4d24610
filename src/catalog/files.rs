//! On-disk shapes of the reference datasets.

use crate::error::{CatalogErrorKind, GreenScoreError, Result};
use crate::model::{ProductLabel, ProductPackaging, ThreatenedSpecies};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

pub const CATEGORIES_FILE: &str = "agribalise-ref.json";
pub const LABELS_FILE: &str = "labels.json";
pub const COUNTRY_ORIGIN_FILE: &str = "country-origin-ref.json";
pub const COUNTRY_TRANSPORT_FILE: &str = "country-transport-ref.json";
pub const PACKAGINGS_FILE: &str = "packagings-ref.json";
pub const FAO_ZONES_FILE: &str = "fao-zones-ref.json";
pub const THREATENED_SPECIES_FILE: &str = "threatened-species-ref.json";

/// Every file a reference directory must contain.
pub const REFERENCE_FILES: &[&str] = &[
    CATEGORIES_FILE,
    LABELS_FILE,
    COUNTRY_ORIGIN_FILE,
    COUNTRY_TRANSPORT_FILE,
    PACKAGINGS_FILE,
    FAO_ZONES_FILE,
    THREATENED_SPECIES_FILE,
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoriesFile {
    pub agribalise_ref: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCategory {
    pub name: String,
    #[serde(default)]
    pub agb_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LabelsFile {
    pub labels: Vec<ProductLabel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryOriginFile {
    pub origin_scores: Vec<RawOriginScore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawOriginScore {
    pub name: String,
    #[serde(default)]
    pub origin_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryTransportFile {
    pub transport_scores: Vec<RawTransportScore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTransportScore {
    pub name: String,
    #[serde(default)]
    pub transport_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PackagingsFile {
    pub packagings: Vec<ProductPackaging>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FaoZonesFile {
    pub fao_zones: Vec<RawFaoZone>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFaoZone {
    pub fao_id: u32,
    pub ocean: String,
    #[serde(default)]
    pub transport_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreatenedSpeciesFile {
    pub threatened_species: Vec<ThreatenedSpecies>,
}

/// Read and parse one reference file, naming it in any error.
pub(crate) fn read_reference_file<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(GreenScoreError::catalog(
            name,
            CatalogErrorKind::MissingFile(path),
        ));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| GreenScoreError::io(&path, e))?;
    serde_json::from_str(&content).map_err(|e| {
        GreenScoreError::catalog(name, CatalogErrorKind::InvalidJson(e.to_string()))
    })
}
