//! Reference datasets: categories, labels, countries, FAO zones, packagings
//! and threatened species.
//!
//! A reference directory holds one JSON file per dataset (see
//! [`REFERENCE_FILES`]). [`ReferenceCatalog::load_dir`] reads them all,
//! skips duplicate and incomplete entries, and returns a
//! [`CatalogLoadReport`] listing what was skipped.
//!
//! ```no_run
//! use green_score::catalog::ReferenceCatalog;
//! use std::path::Path;
//!
//! let (catalog, report) = ReferenceCatalog::load_dir(Path::new("public")).unwrap();
//! let tomato = catalog.category("Tomate").unwrap();
//! println!("{} categories, Tomate = {}", report.categories, tomato.agb_score);
//! ```

mod files;
mod reference;
mod report;

pub use files::{
    CATEGORIES_FILE, COUNTRY_ORIGIN_FILE, COUNTRY_TRANSPORT_FILE, FAO_ZONES_FILE, LABELS_FILE,
    PACKAGINGS_FILE, REFERENCE_FILES, THREATENED_SPECIES_FILE,
};
pub use reference::{ReferenceCatalog, ReferenceCatalogBuilder, SUGGESTION_THRESHOLD};
pub use report::CatalogLoadReport;
