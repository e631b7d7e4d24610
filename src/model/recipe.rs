//! Recipe aggregate: the ordered set of products being scored.

use super::product::{Product, ProductId};
use crate::error::{GreenScoreError, RecipeErrorKind, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A recipe owns its products, keyed by id in insertion order.
///
/// Scores are never cached here; ask a
/// [`RecipeScorer`](crate::scoring::RecipeScorer) for a fresh snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    products: IndexMap<ProductId, Product>,
}

impl Recipe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            products: IndexMap::new(),
        }
    }

    /// Build a recipe from products, rejecting duplicate ids.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut recipe = Self::new();
        for product in products {
            recipe.add_product(product)?;
        }
        Ok(recipe)
    }

    /// Append a product. Fails if a product with the same id exists.
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        if self.products.contains_key(product.id()) {
            return Err(GreenScoreError::recipe(
                "adding product",
                RecipeErrorKind::DuplicateProduct(product.id().to_string()),
            ));
        }
        self.products.insert(product.id().clone(), product);
        Ok(())
    }

    /// Remove a product, keeping the order of the others.
    pub fn remove_product(&mut self, id: &ProductId) -> Option<Product> {
        self.products.shift_remove(id)
    }

    /// Replace a product by a new value with the same id.
    ///
    /// Returns the previous value.
    pub fn replace_product(&mut self, product: Product) -> Result<Product> {
        match self.products.get_mut(product.id()) {
            Some(slot) => Ok(std::mem::replace(slot, product)),
            None => Err(GreenScoreError::recipe(
                "replacing product",
                RecipeErrorKind::UnknownProduct(product.id().to_string()),
            )),
        }
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn product_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.get_mut(id)
    }

    /// Products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Products that take part in mass-weighted aggregates.
    pub fn scored_products(&self) -> impl Iterator<Item = &Product> {
        self.products.values().filter(|p| p.is_scored())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total mass of the scored products, in kilograms.
    #[must_use]
    pub fn total_mass(&self) -> f64 {
        self.scored_products().map(Product::quantity).sum()
    }
}
