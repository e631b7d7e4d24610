//! In-memory reference catalog and name lookups.

use super::files::{
    read_reference_file, CategoriesFile, CountryOriginFile, CountryTransportFile, FaoZonesFile,
    LabelsFile, PackagingsFile, ThreatenedSpeciesFile, CATEGORIES_FILE, COUNTRY_ORIGIN_FILE,
    COUNTRY_TRANSPORT_FILE, FAO_ZONES_FILE, LABELS_FILE, PACKAGINGS_FILE,
    THREATENED_SPECIES_FILE,
};
use super::report::CatalogLoadReport;
use crate::error::{GreenScoreError, ReferenceKind, Result};
use crate::model::{
    Country, FaoZone, ProductCategory, ProductLabel, ProductPackaging, ThreatenedSpecies,
};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::path::Path;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Reference datasets keyed by name, in file order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    categories: IndexMap<String, ProductCategory>,
    labels: IndexMap<String, ProductLabel>,
    countries: IndexMap<String, Country>,
    fao_zones: IndexMap<u32, FaoZone>,
    packagings: IndexMap<String, ProductPackaging>,
    threatened_species: IndexMap<String, ThreatenedSpecies>,
}

impl ReferenceCatalog {
    #[must_use]
    pub fn builder() -> ReferenceCatalogBuilder {
        ReferenceCatalogBuilder::default()
    }

    /// Load every reference file from `dir`.
    pub fn load_dir(dir: &Path) -> Result<(Self, CatalogLoadReport)> {
        let mut catalog = Self::default();
        let mut report = CatalogLoadReport::default();

        let categories: CategoriesFile = read_reference_file(dir, CATEGORIES_FILE)?;
        for (index, raw) in categories.agribalise_ref.into_iter().enumerate() {
            if catalog.categories.contains_key(&raw.name) {
                report.duplicate_categories.push(raw.name);
                continue;
            }
            let Some(agb_score) = raw.agb_score else {
                report.categories_without_score.push(raw.name);
                continue;
            };
            catalog
                .categories
                .insert(raw.name.clone(), ProductCategory::new(index, raw.name, agb_score));
        }

        let labels: LabelsFile = read_reference_file(dir, LABELS_FILE)?;
        for label in labels.labels {
            catalog.labels.entry(label.name.clone()).or_insert(label);
        }

        catalog.load_countries(dir, &mut report)?;

        let packagings: PackagingsFile = read_reference_file(dir, PACKAGINGS_FILE)?;
        for packaging in packagings.packagings {
            catalog
                .packagings
                .entry(packaging.format.clone())
                .or_insert(packaging);
        }

        let zones: FaoZonesFile = read_reference_file(dir, FAO_ZONES_FILE)?;
        for raw in zones.fao_zones {
            catalog.fao_zones.entry(raw.fao_id).or_insert(FaoZone {
                fao_id: raw.fao_id,
                ocean: raw.ocean,
                transport_score: raw.transport_score,
            });
        }

        let species: ThreatenedSpeciesFile = read_reference_file(dir, THREATENED_SPECIES_FILE)?;
        for entry in species.threatened_species {
            catalog
                .threatened_species
                .entry(entry.species.clone())
                .or_insert(entry);
        }

        report.fill_counts(&catalog);
        report.log(dir);
        Ok((catalog, report))
    }

    /// Origin scores first, then transport scores merged by country name.
    fn load_countries(&mut self, dir: &Path, report: &mut CatalogLoadReport) -> Result<()> {
        let origins: CountryOriginFile = read_reference_file(dir, COUNTRY_ORIGIN_FILE)?;
        let transports: CountryTransportFile = read_reference_file(dir, COUNTRY_TRANSPORT_FILE)?;

        let mut without_transport: Vec<String> = Vec::new();

        for raw in origins.origin_scores {
            if self.countries.contains_key(&raw.name) {
                report.duplicate_countries.push(raw.name);
                continue;
            }
            let Some(score) = raw.origin_score else {
                report.countries_missing_values.push(raw.name);
                continue;
            };
            without_transport.push(raw.name.clone());
            self.countries
                .insert(raw.name.clone(), Country::new(raw.name).with_origin_score(score));
        }

        for raw in transports.transport_scores {
            match self.countries.entry(raw.name) {
                Entry::Vacant(slot) => {
                    report.countries_without_origin.push(slot.key().clone());
                    let country = Country {
                        name: slot.key().clone(),
                        origin_score: None,
                        transport_score: raw.transport_score,
                    };
                    slot.insert(country);
                }
                Entry::Occupied(mut slot) => {
                    without_transport.retain(|name| name != slot.key());
                    match raw.transport_score {
                        Some(score) => slot.get_mut().transport_score = Some(score),
                        None => report.countries_missing_values.push(slot.key().clone()),
                    }
                }
            }
        }

        report.countries_without_transport = without_transport;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn category(&self, name: &str) -> Result<&ProductCategory> {
        lookup(&self.categories, ReferenceKind::Category, name)
    }

    pub fn label(&self, name: &str) -> Result<&ProductLabel> {
        lookup(&self.labels, ReferenceKind::Label, name)
    }

    pub fn country(&self, name: &str) -> Result<&Country> {
        lookup(&self.countries, ReferenceKind::Country, name)
    }

    pub fn packaging(&self, format: &str) -> Result<&ProductPackaging> {
        lookup(&self.packagings, ReferenceKind::Packaging, format)
    }

    pub fn threatened_species(&self, species: &str) -> Result<&ThreatenedSpecies> {
        lookup(
            &self.threatened_species,
            ReferenceKind::ThreatenedSpecies,
            species,
        )
    }

    pub fn fao_zone(&self, fao_id: u32) -> Result<&FaoZone> {
        self.fao_zones
            .get(&fao_id)
            .ok_or_else(|| GreenScoreError::lookup(ReferenceKind::FaoZone, fao_id.to_string(), None))
    }

    // ------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------

    pub fn categories(&self) -> impl Iterator<Item = &ProductCategory> {
        self.categories.values()
    }

    pub fn labels(&self) -> impl Iterator<Item = &ProductLabel> {
        self.labels.values()
    }

    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    pub fn fao_zones(&self) -> impl Iterator<Item = &FaoZone> {
        self.fao_zones.values()
    }

    pub fn packagings(&self) -> impl Iterator<Item = &ProductPackaging> {
        self.packagings.values()
    }

    pub fn all_threatened_species(&self) -> impl Iterator<Item = &ThreatenedSpecies> {
        self.threatened_species.values()
    }

    /// Record count per dataset, in file order.
    #[must_use]
    pub fn counts(&self) -> [(ReferenceKind, usize); 6] {
        [
            (ReferenceKind::Category, self.categories.len()),
            (ReferenceKind::Label, self.labels.len()),
            (ReferenceKind::Country, self.countries.len()),
            (ReferenceKind::FaoZone, self.fao_zones.len()),
            (ReferenceKind::Packaging, self.packagings.len()),
            (
                ReferenceKind::ThreatenedSpecies,
                self.threatened_species.len(),
            ),
        ]
    }
}

fn lookup<'a, T>(map: &'a IndexMap<String, T>, kind: ReferenceKind, key: &str) -> Result<&'a T> {
    map.get(key).ok_or_else(|| {
        let suggestion = suggest(map.keys().map(String::as_str), key);
        tracing::debug!("Lookup miss: {kind} '{key}'");
        GreenScoreError::lookup(kind, key, suggestion)
    })
}

/// Closest known name to `key`, if it is close enough.
fn suggest<'a>(candidates: impl Iterator<Item = &'a str>, key: &str) -> Option<String> {
    let key_lower = key.to_lowercase();
    candidates
        .map(|name| (name, strsim::jaro_winkler(&key_lower, &name.to_lowercase())))
        .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name.to_string())
}

// ============================================================================
// Builder
// ============================================================================

/// Builds a catalog in memory, first occurrence winning on duplicate keys.
#[derive(Debug, Default)]
#[must_use]
pub struct ReferenceCatalogBuilder {
    catalog: ReferenceCatalog,
}

impl ReferenceCatalogBuilder {
    /// Add a category; its id is its position among the added categories.
    pub fn category(mut self, name: impl Into<String>, agb_score: f64) -> Self {
        let name = name.into();
        let id = self.catalog.categories.len();
        self.catalog
            .categories
            .entry(name.clone())
            .or_insert_with(|| ProductCategory::new(id, name, agb_score));
        self
    }

    pub fn label(mut self, name: impl Into<String>, bonus: f64) -> Self {
        let label = ProductLabel::new(name, bonus);
        self.catalog
            .labels
            .entry(label.name.clone())
            .or_insert(label);
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.catalog
            .countries
            .entry(country.name.clone())
            .or_insert(country);
        self
    }

    pub fn fao_zone(mut self, zone: FaoZone) -> Self {
        self.catalog.fao_zones.entry(zone.fao_id).or_insert(zone);
        self
    }

    pub fn packaging(mut self, format: impl Into<String>, bonus: f64) -> Self {
        let packaging = ProductPackaging::new(format, bonus);
        self.catalog
            .packagings
            .entry(packaging.format.clone())
            .or_insert(packaging);
        self
    }

    pub fn threatened_species(mut self, species: ThreatenedSpecies) -> Self {
        self.catalog
            .threatened_species
            .entry(species.species.clone())
            .or_insert(species);
        self
    }

    #[must_use]
    pub fn build(self) -> ReferenceCatalog {
        self.catalog
    }
}
