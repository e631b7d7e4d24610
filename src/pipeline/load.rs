//! Reference data and recipe loading with error context.

use super::PipelineError;
use crate::catalog::{CatalogLoadReport, ReferenceCatalog};
use crate::model::Recipe;
use crate::parsers::{parse_recipe, ResolveWarning};
use anyhow::Result;
use std::path::Path;

/// A recipe resolved against the catalog
#[derive(Debug)]
pub struct LoadedRecipe {
    pub recipe: Recipe,
    /// Lookups and quantities that could not be applied
    pub warnings: Vec<ResolveWarning>,
}

impl LoadedRecipe {
    /// Warning messages, one per failed lookup
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Number of warnings caused by unknown reference names
    #[must_use]
    pub fn lookup_failures(&self) -> usize {
        self.warnings.iter().filter(|w| w.error.is_lookup()).count()
    }
}

/// Load the reference catalog, naming the directory on failure.
pub fn load_catalog_with_context(
    dir: &Path,
    quiet: bool,
) -> Result<(ReferenceCatalog, CatalogLoadReport)> {
    if !quiet {
        tracing::info!("Loading reference data: {}", dir.display());
    }

    let loaded = ReferenceCatalog::load_dir(dir).map_err(|e| PipelineError::CatalogFailed {
        path: dir.display().to_string(),
        source: e.into(),
    })?;
    Ok(loaded)
}

/// Parse a recipe document and resolve it against `catalog`.
pub fn load_recipe_with_context(
    path: &Path,
    catalog: &ReferenceCatalog,
    quiet: bool,
) -> Result<LoadedRecipe> {
    if !quiet {
        tracing::info!("Loading recipe: {}", path.display());
    }

    let failed = |e: crate::error::GreenScoreError| PipelineError::RecipeFailed {
        path: path.display().to_string(),
        source: e.into(),
    };

    let document = parse_recipe(path).map_err(failed)?;
    let resolved = document.resolve(catalog).map_err(failed)?;

    if !quiet {
        tracing::info!(
            "Resolved {} products ({} warnings)",
            resolved.recipe.len(),
            resolved.warnings.len()
        );
    }

    Ok(LoadedRecipe {
        recipe: resolved.recipe,
        warnings: resolved.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FaoZone;
    use tempfile::TempDir;

    #[test]
    fn test_recipe_with_unknown_names() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recipe.yaml");
        std::fs::write(
            &path,
            "products:\n  - category: Tomate\n    labels: [Inconnu]\n  - category: Rien\n",
        )
        .unwrap();
        let catalog = ReferenceCatalog::builder().category("Tomate", 0.3).build();

        let loaded = load_recipe_with_context(&path, &catalog, true).unwrap();
        assert_eq!(loaded.recipe.len(), 2);
        assert_eq!(loaded.lookup_failures(), 2);
        assert!(loaded.warning_messages()[0].contains("Inconnu"));
    }

    #[test]
    fn test_origin_maps_resolve_from_yaml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("recipe.yaml");
        std::fs::write(
            &path,
            "products:\n  - category: Tomate\n    origin:\n      country: Frnace\n  - category: Tomate\n    origin: { fao_zone: 27 }\n",
        )
        .unwrap();
        let catalog = ReferenceCatalog::builder()
            .category("Tomate", 0.3)
            .fao_zone(FaoZone::new(27, "Atlantique Nord-Est"))
            .build();

        let loaded = load_recipe_with_context(&path, &catalog, true).unwrap();
        assert_eq!(loaded.lookup_failures(), 1);
        assert!(format!("{loaded:?}").contains("Frnace"));
    }

    #[test]
    fn test_missing_recipe_names_path() {
        let catalog = ReferenceCatalog::default();
        let err = load_recipe_with_context(Path::new("/nonexistent/r.yaml"), &catalog, true)
            .err()
            .unwrap();
        assert!(err.to_string().contains("/nonexistent/r.yaml"));
    }

    #[test]
    fn test_missing_catalog_names_dir() {
        let tmp = TempDir::new().unwrap();
        let err = load_catalog_with_context(tmp.path(), true).err().unwrap();
        assert!(err.to_string().contains("agribalise-ref.json"));
    }
}
