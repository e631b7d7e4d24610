//! Recipe line item.

use super::origin::Origin;
use super::reference::{ProductCategory, ProductLabel, ProductPackaging, ThreatenedSpecies};
use crate::error::{GreenScoreError, Result};
use serde::{Deserialize, Serialize};

/// Default quantity of a freshly created product, in kilograms.
pub const DEFAULT_PRODUCT_QUANTITY: f64 = 0.1;

/// Product identifier, unique within a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ingredient of a recipe with the attributes that drive its score.
///
/// Products hold no derived values: scoring a product returns a separate
/// [`ProductScore`](crate::scoring::ProductScore) snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    category: Option<ProductCategory>,
    packagings: Vec<ProductPackaging>,
    quantity: f64,
    origin: Option<Origin>,
    active: bool,
    has_palm_oil: bool,
    certified_palm_oil: bool,
    threatened_species: Vec<ThreatenedSpecies>,
    labels: Vec<ProductLabel>,
}

impl Default for Product {
    fn default() -> Self {
        Self::new(ProductId::generate())
    }
}

impl Product {
    /// Create a product with default attributes: active, 100 g, nothing selected.
    #[must_use]
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            category: None,
            packagings: Vec::new(),
            quantity: DEFAULT_PRODUCT_QUANTITY,
            origin: None,
            active: true,
            has_palm_oil: false,
            certified_palm_oil: false,
            threatened_species: Vec::new(),
            labels: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    #[must_use]
    pub const fn category(&self) -> Option<&ProductCategory> {
        self.category.as_ref()
    }

    #[must_use]
    pub fn packagings(&self) -> &[ProductPackaging] {
        &self.packagings
    }

    /// Quantity in kilograms
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    #[must_use]
    pub const fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn has_palm_oil(&self) -> bool {
        self.has_palm_oil
    }

    #[must_use]
    pub const fn certified_palm_oil(&self) -> bool {
        self.certified_palm_oil
    }

    #[must_use]
    pub fn threatened_species(&self) -> &[ThreatenedSpecies] {
        &self.threatened_species
    }

    #[must_use]
    pub fn labels(&self) -> &[ProductLabel] {
        &self.labels
    }

    /// Whether the product takes part in mass-weighted aggregates.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.active && self.category.is_some()
    }

    /// Whether the product uses palm oil without certification.
    #[must_use]
    pub const fn has_uncertified_palm_oil(&self) -> bool {
        self.has_palm_oil && !self.certified_palm_oil
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    pub fn set_category(&mut self, category: ProductCategory) {
        self.category = Some(category);
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Set the origin, replacing any previous country or FAO zone.
    pub fn set_origin(&mut self, origin: impl Into<Origin>) {
        self.origin = Some(origin.into());
    }

    pub fn clear_origin(&mut self) {
        self.origin = None;
    }

    /// Set the quantity in kilograms.
    ///
    /// Non-finite or non-positive values are rejected and leave the product
    /// unchanged.
    pub fn set_quantity(&mut self, quantity: f64) -> Result<()> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(GreenScoreError::validation(format!(
                "quantity of product {} must be a positive number of kilograms, got {quantity}",
                self.id
            )));
        }
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_palm_oil(&mut self, has_palm_oil: bool, certified: bool) {
        self.has_palm_oil = has_palm_oil;
        self.certified_palm_oil = certified;
    }

    /// Add a label; a label with the same name is not added twice.
    pub fn add_label(&mut self, label: ProductLabel) {
        if !self.labels.iter().any(|l| l.name == label.name) {
            self.labels.push(label);
        }
    }

    /// Remove a label by name, returning it if present.
    pub fn remove_label(&mut self, name: &str) -> Option<ProductLabel> {
        let index = self.labels.iter().position(|l| l.name == name)?;
        Some(self.labels.remove(index))
    }

    pub fn add_packaging(&mut self, packaging: ProductPackaging) {
        if !self.packagings.iter().any(|p| p.format == packaging.format) {
            self.packagings.push(packaging);
        }
    }

    pub fn remove_packaging(&mut self, format: &str) -> Option<ProductPackaging> {
        let index = self.packagings.iter().position(|p| p.format == format)?;
        Some(self.packagings.remove(index))
    }

    pub fn add_threatened_species(&mut self, species: ThreatenedSpecies) {
        if !self
            .threatened_species
            .iter()
            .any(|s| s.species == species.species)
        {
            self.threatened_species.push(species);
        }
    }

    pub fn remove_threatened_species(&mut self, species: &str) -> Option<ThreatenedSpecies> {
        let index = self
            .threatened_species
            .iter()
            .position(|s| s.species == species)?;
        Some(self.threatened_species.remove(index))
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    #[must_use]
    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.set_category(category);
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<Origin>) -> Self {
        self.set_origin(origin);
        self
    }

    /// Builder form of [`set_quantity`](Self::set_quantity).
    pub fn with_quantity(mut self, quantity: f64) -> Result<Self> {
        self.set_quantity(quantity)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.set_active(active);
        self
    }

    #[must_use]
    pub fn with_palm_oil(mut self, has_palm_oil: bool, certified: bool) -> Self {
        self.set_palm_oil(has_palm_oil, certified);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: ProductLabel) -> Self {
        self.add_label(label);
        self
    }

    #[must_use]
    pub fn with_packaging(mut self, packaging: ProductPackaging) -> Self {
        self.add_packaging(packaging);
        self
    }

    #[must_use]
    pub fn with_threatened_species(mut self, species: ThreatenedSpecies) -> Self {
        self.add_threatened_species(species);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Country, FaoZone};

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new("p1");
        assert!(product.is_active());
        assert_eq!(product.quantity(), DEFAULT_PRODUCT_QUANTITY);
        assert!(product.category().is_none());
        assert!(product.origin().is_none());
        assert!(product.labels().is_empty());
        assert!(!product.is_scored());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(Product::default().id(), Product::default().id());
    }

    #[test]
    fn test_set_quantity_rejects_invalid_values() {
        let mut product = Product::new("p1");
        assert!(product.set_quantity(0.0).is_err());
        assert!(product.set_quantity(-1.0).is_err());
        assert!(product.set_quantity(f64::NAN).is_err());
        assert_eq!(product.quantity(), DEFAULT_PRODUCT_QUANTITY);

        product.set_quantity(0.25).unwrap();
        assert_eq!(product.quantity(), 0.25);
    }

    #[test]
    fn test_selecting_fao_zone_replaces_country() {
        let mut product = Product::new("p1").with_origin(Country::new("France"));
        product.set_origin(FaoZone::new(27, "Atlantique Nord-Est"));
        assert_eq!(product.origin().and_then(Origin::fao_id), Some(27));
    }

    #[test]
    fn test_labels_are_not_duplicated() {
        let product = Product::new("p1")
            .with_label(ProductLabel::new("AB", 10.0))
            .with_label(ProductLabel::new("AB", 10.0));
        assert_eq!(product.labels().len(), 1);
    }

    #[test]
    fn test_remove_label() {
        let mut product = Product::new("p1").with_label(ProductLabel::new("MSC", 15.0));
        assert_eq!(product.remove_label("MSC").map(|l| l.bonus), Some(15.0));
        assert!(product.remove_label("MSC").is_none());
    }

    #[test]
    fn test_uncertified_palm_oil() {
        assert!(Product::new("p1")
            .with_palm_oil(true, false)
            .has_uncertified_palm_oil());
        assert!(!Product::new("p1")
            .with_palm_oil(true, true)
            .has_uncertified_palm_oil());
    }
}
