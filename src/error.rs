//! Unified error types for green-score.
//!
//! The scoring engine itself never fails: missing attributes degrade to zero
//! or exclude a product. Errors come from the layers around it (reference
//! files, recipe documents, name lookups and argument validation).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for green-score operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GreenScoreError {
    /// A named reference record does not exist in the catalog
    #[error("Unknown {kind} '{key}'{}", suggestion_suffix(.suggestion))]
    LookupNotFound {
        kind: ReferenceKind,
        key: String,
        suggestion: Option<String>,
    },

    /// Errors while loading reference datasets
    #[error("Failed to load reference data: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors while reading or editing a recipe
    #[error("Recipe error: {context}")]
    Recipe {
        context: String,
        #[source]
        source: RecipeErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

/// Reference dataset a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Category,
    Label,
    Country,
    FaoZone,
    Packaging,
    ThreatenedSpecies,
}

impl ReferenceKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Label => "label",
            Self::Country => "country",
            Self::FaoZone => "FAO zone",
            Self::Packaging => "packaging",
            Self::ThreatenedSpecies => "threatened species",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Reference file not found: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

/// Specific recipe error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RecipeErrorKind {
    #[error("Invalid recipe document: {0}")]
    InvalidDocument(String),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Unknown product id: {0}")]
    UnknownProduct(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for green-score operations
pub type Result<T> = std::result::Result<T, GreenScoreError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GreenScoreError {
    /// Create a lookup error, with an optional "did you mean" hint
    pub fn lookup(kind: ReferenceKind, key: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::LookupNotFound {
            kind,
            key: key.into(),
            suggestion,
        }
    }

    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a recipe error with context
    pub fn recipe(context: impl Into<String>, source: RecipeErrorKind) -> Self {
        Self::Recipe {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error is a recoverable reference lookup miss
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::LookupNotFound { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for GreenScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain, outermost first:
///
/// ```ignore
/// use green_score::error::ErrorContext;
///
/// let catalog = ReferenceCatalog::load_dir(dir)
///     .with_context(|| format!("loading reference data for {}", recipe.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<GreenScoreError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Lookup misses keep their shape so callers can still recognize them.
fn add_context_to_error(err: GreenScoreError, new_ctx: &str) -> GreenScoreError {
    match err {
        GreenScoreError::Catalog {
            context: existing,
            source,
        } => GreenScoreError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GreenScoreError::Recipe {
            context: existing,
            source,
        } => GreenScoreError::Recipe {
            context: chain_context(new_ctx, &existing),
            source,
        },
        GreenScoreError::Io {
            path,
            message,
            source,
        } => GreenScoreError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        GreenScoreError::Config(msg) => GreenScoreError::Config(chain_context(new_ctx, &msg)),
        GreenScoreError::Validation(msg) => {
            GreenScoreError::Validation(chain_context(new_ctx, &msg))
        }
        lookup @ GreenScoreError::LookupNotFound { .. } => lookup,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
