//! Recipe documents: products named by their reference records.

use crate::catalog::ReferenceCatalog;
use crate::error::{GreenScoreError, Result};
use crate::model::{Origin, Product, ProductId, Recipe};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe as written by a user, before catalog resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

/// One product line, with reference records given by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductEntry {
    /// Product id, generated from the line position when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Quantity in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginEntry>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub packagings: Vec<String>,
    #[serde(default)]
    pub threatened_species: Vec<String>,
    #[serde(default)]
    pub has_palm_oil: bool,
    #[serde(default)]
    pub certified_palm_oil: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Default for ProductEntry {
    fn default() -> Self {
        Self {
            id: None,
            category: None,
            quantity: None,
            origin: None,
            labels: Vec::new(),
            packagings: Vec::new(),
            threatened_species: Vec::new(),
            has_palm_oil: false,
            certified_palm_oil: false,
            active: true,
        }
    }
}

/// Origin reference: `{ country: France }` or `{ fao_zone: 27 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOriginEntry", into = "RawOriginEntry")]
pub enum OriginEntry {
    Country(String),
    FaoZone(u32),
}

/// Wire shape of [`OriginEntry`]: a map with exactly one of the two keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOriginEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fao_zone: Option<u32>,
}

impl TryFrom<RawOriginEntry> for OriginEntry {
    type Error = String;

    fn try_from(raw: RawOriginEntry) -> std::result::Result<Self, Self::Error> {
        match (raw.country, raw.fao_zone) {
            (Some(country), None) => Ok(Self::Country(country)),
            (None, Some(fao_id)) => Ok(Self::FaoZone(fao_id)),
            (Some(_), Some(_)) => {
                Err("origin must name either a country or a fao_zone, not both".to_string())
            }
            (None, None) => Err("origin must name a country or a fao_zone".to_string()),
        }
    }
}

impl From<OriginEntry> for RawOriginEntry {
    fn from(origin: OriginEntry) -> Self {
        match origin {
            OriginEntry::Country(country) => Self {
                country: Some(country),
                fao_zone: None,
            },
            OriginEntry::FaoZone(fao_id) => Self {
                country: None,
                fao_zone: Some(fao_id),
            },
        }
    }
}

/// Problem found while resolving one product; the attribute is left unset.
#[derive(Debug)]
pub struct ResolveWarning {
    pub product_id: ProductId,
    pub error: GreenScoreError,
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product {}: {}", self.product_id, self.error)
    }
}

/// A recipe built from a document, with the lookups that failed.
#[derive(Debug)]
pub struct ResolvedRecipe {
    pub recipe: Recipe,
    pub warnings: Vec<ResolveWarning>,
}

impl ResolvedRecipe {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl RecipeDocument {
    /// Build a [`Recipe`] by looking every name up in `catalog`.
    ///
    /// Unknown names and invalid quantities become warnings. Duplicate
    /// product ids are an error.
    pub fn resolve(&self, catalog: &ReferenceCatalog) -> Result<ResolvedRecipe> {
        let mut recipe = self
            .name
            .as_ref()
            .map_or_else(Recipe::new, |name| Recipe::named(name.clone()));
        let mut warnings = Vec::new();

        for (index, entry) in self.products.iter().enumerate() {
            let id = entry
                .id
                .clone()
                .map_or_else(|| ProductId::from(format!("product-{}", index + 1)), ProductId::from);
            let (product, errors) = entry.resolve(id.clone(), catalog);
            for error in errors {
                tracing::warn!("Product {}: {}", id, error);
                warnings.push(ResolveWarning {
                    product_id: id.clone(),
                    error,
                });
            }
            recipe.add_product(product)?;
        }

        Ok(ResolvedRecipe { recipe, warnings })
    }
}

impl ProductEntry {
    fn resolve(&self, id: ProductId, catalog: &ReferenceCatalog) -> (Product, Vec<GreenScoreError>) {
        let mut product = Product::new(id);
        let mut errors = Vec::new();

        if let Some(name) = &self.category {
            match catalog.category(name) {
                Ok(category) => product.set_category(category.clone()),
                Err(e) => errors.push(e),
            }
        }

        if let Some(quantity) = self.quantity {
            if let Err(e) = product.set_quantity(quantity) {
                errors.push(e);
            }
        }

        if let Some(origin) = &self.origin {
            let resolved: Result<Origin> = match origin {
                OriginEntry::Country(name) => catalog.country(name).cloned().map(Origin::from),
                OriginEntry::FaoZone(fao_id) => catalog.fao_zone(*fao_id).cloned().map(Origin::from),
            };
            match resolved {
                Ok(origin) => product.set_origin(origin),
                Err(e) => errors.push(e),
            }
        }

        for name in &self.labels {
            match catalog.label(name) {
                Ok(label) => product.add_label(label.clone()),
                Err(e) => errors.push(e),
            }
        }

        for format in &self.packagings {
            match catalog.packaging(format) {
                Ok(packaging) => product.add_packaging(packaging.clone()),
                Err(e) => errors.push(e),
            }
        }

        for name in &self.threatened_species {
            match catalog.threatened_species(name) {
                Ok(species) => product.add_threatened_species(species.clone()),
                Err(e) => errors.push(e),
            }
        }

        product.set_palm_oil(self.has_palm_oil, self.certified_palm_oil);
        product.set_active(self.active);

        (product, errors)
    }
}
