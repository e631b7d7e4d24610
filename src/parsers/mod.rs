//! Recipe document parsing.
//!
//! Recipes are written in JSON or YAML. The format is chosen from the file
//! extension; unknown extensions are sniffed from the content.
//!
//! ## Usage
//!
//! ```no_run
//! use green_score::catalog::ReferenceCatalog;
//! use green_score::parsers::parse_recipe;
//! use std::path::Path;
//!
//! let (catalog, _) = ReferenceCatalog::load_dir(Path::new("public")).unwrap();
//! let document = parse_recipe(Path::new("salade.yaml")).unwrap();
//! let resolved = document.resolve(&catalog).unwrap();
//! for warning in &resolved.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

mod recipe;

pub use recipe::{OriginEntry, ProductEntry, RecipeDocument, ResolveWarning, ResolvedRecipe};

use crate::error::{ErrorContext, GreenScoreError, RecipeErrorKind, Result};
use std::path::Path;

/// Maximum recipe file size (16 MB).
const MAX_RECIPE_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Serialization format of a recipe document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Format implied by a file extension, if any.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guess the format of raw content: JSON if it opens an object.
    #[must_use]
    pub fn sniff(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }
}

/// Read and parse a recipe document from a file.
pub fn parse_recipe(path: &Path) -> Result<RecipeDocument> {
    let metadata = std::fs::metadata(path).map_err(|e| GreenScoreError::io(path, e))?;
    if metadata.len() > MAX_RECIPE_FILE_SIZE {
        return Err(GreenScoreError::recipe(
            path.display().to_string(),
            RecipeErrorKind::InvalidDocument(format!(
                "file is {} MB, exceeding the {} MB limit",
                metadata.len() / (1024 * 1024),
                MAX_RECIPE_FILE_SIZE / (1024 * 1024),
            )),
        ));
    }

    let content = std::fs::read_to_string(path).map_err(|e| GreenScoreError::io(path, e))?;
    let format = DocumentFormat::from_path(path).unwrap_or_else(|| DocumentFormat::sniff(&content));
    let document = parse_recipe_str(&content, format).context(path.display().to_string())?;

    tracing::info!(
        "Parsed recipe {} ({} products)",
        path.display(),
        document.products.len()
    );
    Ok(document)
}

/// Parse a recipe document from a string in the given format.
pub fn parse_recipe_str(content: &str, format: DocumentFormat) -> Result<RecipeDocument> {
    let parsed = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| {
        GreenScoreError::recipe("parsing recipe", RecipeErrorKind::InvalidDocument(message))
    })
}
