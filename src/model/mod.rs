//! Domain model for recipe scoring.
//!
//! Reference records ([`ProductCategory`], [`ProductLabel`],
//! [`ProductPackaging`], [`ThreatenedSpecies`]) come from the catalog and are
//! immutable. A [`Product`] is a recipe line item built from them, and a
//! [`Recipe`] owns an ordered set of products.

mod origin;
mod product;
mod recipe;
mod reference;

pub use origin::*;
pub use product::*;
pub use recipe::*;
pub use reference::*;
