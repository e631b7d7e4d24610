//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".green-score.yaml",
    ".green-score.yml",
    "green-score.yaml",
    "green-score.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/green-score/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("green-score")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so a CLI config
    /// built from unset flags leaves file settings in place.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Scoring constants
        let scoring = &other.scoring;
        if scoring.max_product_label_bonus != defaults.scoring.max_product_label_bonus {
            self.scoring.max_product_label_bonus = scoring.max_product_label_bonus;
        }
        if scoring.max_product_packaging_malus != defaults.scoring.max_product_packaging_malus {
            self.scoring.max_product_packaging_malus = scoring.max_product_packaging_malus;
        }
        if scoring.max_recipe_bonus != defaults.scoring.max_recipe_bonus {
            self.scoring.max_recipe_bonus = scoring.max_recipe_bonus;
        }
        if scoring.threatened_malus != defaults.scoring.threatened_malus {
            self.scoring.threatened_malus = scoring.threatened_malus;
        }
        if scoring.transport_factor != defaults.scoring.transport_factor {
            self.scoring.transport_factor = scoring.transport_factor;
        }
        if scoring.exclusive_labels != defaults.scoring.exclusive_labels {
            self.scoring
                .exclusive_labels
                .clone_from(&scoring.exclusive_labels);
        }

        // Output config - only override if explicitly set
        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Reference data
        if other.reference.data_dir.is_some() {
            self.reference.data_dir.clone_from(&other.reference.data_dir);
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.strict_lookups {
            self.behavior.strict_lookups = true;
        }
        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Green score configuration
# Place this file at .green-score.yaml in your project root or ~/.config/green-score/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Green score configuration file
# ==============================
#
# Place it at:
#   - .green-score.yaml in your project root
#   - ~/.config/green-score/green-score.yaml for global config
#
# CLI arguments always override file settings.

# Scoring constants
scoring:
  # Cap on the cumulated label bonus of one product
  max_product_label_bonus: 20.0
  # Floor on the cumulated packaging malus of one product
  max_product_packaging_malus: -10.0
  # Cap on the sum of recipe bonuses
  max_recipe_bonus: 20.0
  # Malus applied once for uncertified palm oil or a threatened species
  threatened_malus: -10.0
  # Transport score multiplier
  transport_factor: 0.15
  # Labels that cannot be cumulated on one product
  exclusive_labels: [ASC, MSC]

# Output configuration
output:
  # Format: summary, json, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: score.json
  no_color: false

# Reference datasets
reference:
  # Directory with agribalise-ref.json, labels.json, ...
  # data_dir: ./public

# Behavior flags
behavior:
  quiet: false
  # Exit with code 2 when the recipe names unknown reference records
  strict_lookups: false
  # Exit with code 1 when the green score is below this value
  # min_score: 60
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".green-score.yaml");
        std::fs::write(&config_path, "scoring:\n  max_recipe_bonus: 15\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
scoring:
  max_recipe_bonus: 15
  exclusive_labels: [ASC, MSC, Pêche durable]
behavior:
  strict_lookups: true
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.scoring.max_recipe_bonus, 15.0);
        assert_eq!(config.scoring.exclusive_labels.len(), 3);
        assert!(config.behavior.strict_lookups);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "scoring: [unclosed").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().max_recipe_bonus(12.0).build();
        let cli = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .strict_lookups(true)
            .build();

        base.merge(&cli);

        assert_eq!(base.scoring.max_recipe_bonus, 12.0);
        assert_eq!(base.output.format, ReportFormat::Json);
        assert!(base.behavior.strict_lookups);
    }

    #[test]
    fn test_merge_overrides_scoring_constant() {
        let mut base = AppConfig::builder().max_recipe_bonus(12.0).build();
        let cli = AppConfig::builder().max_recipe_bonus(5.0).build();
        base.merge(&cli);
        assert_eq!(base.scoring.max_recipe_bonus, 5.0);
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        assert!(example.contains("scoring:"));
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_full_example_config_parses() {
        let parsed: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(parsed.scoring, AppConfig::default().scoring);
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "behavior:\n  quiet: true").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
