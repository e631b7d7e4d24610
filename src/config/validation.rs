//! Configuration validation for green-score.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::*;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn finite_error(field: &str, value: f64) -> Option<ConfigError> {
    (!value.is_finite()).then(|| ConfigError {
        field: field.to_string(),
        message: format!("Value must be a finite number, got {value}"),
    })
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let fields = [
            ("scoring.max_product_label_bonus", self.max_product_label_bonus),
            (
                "scoring.max_product_packaging_malus",
                self.max_product_packaging_malus,
            ),
            ("scoring.max_recipe_bonus", self.max_recipe_bonus),
            ("scoring.threatened_malus", self.threatened_malus),
            ("scoring.transport_factor", self.transport_factor),
        ];
        let non_finite: Vec<ConfigError> = fields
            .iter()
            .filter_map(|(field, value)| finite_error(field, *value))
            .collect();
        if !non_finite.is_empty() {
            return non_finite;
        }

        if self.max_product_label_bonus < 0.0 {
            errors.push(ConfigError {
                field: "scoring.max_product_label_bonus".to_string(),
                message: format!(
                    "Label bonus cap must be zero or positive, got {}",
                    self.max_product_label_bonus
                ),
            });
        }

        if self.max_product_packaging_malus > 0.0 {
            errors.push(ConfigError {
                field: "scoring.max_product_packaging_malus".to_string(),
                message: format!(
                    "Packaging malus floor must be zero or negative, got {}",
                    self.max_product_packaging_malus
                ),
            });
        }

        if self.max_recipe_bonus < 0.0 {
            errors.push(ConfigError {
                field: "scoring.max_recipe_bonus".to_string(),
                message: format!(
                    "Recipe bonus cap must be zero or positive, got {}",
                    self.max_recipe_bonus
                ),
            });
        }

        if self.threatened_malus > 0.0 {
            errors.push(ConfigError {
                field: "scoring.threatened_malus".to_string(),
                message: format!(
                    "Threatened species malus must be zero or negative, got {}",
                    self.threatened_malus
                ),
            });
        }

        if self.transport_factor < 0.0 {
            errors.push(ConfigError {
                field: "scoring.transport_factor".to_string(),
                message: format!(
                    "Transport factor must be zero or positive, got {}",
                    self.transport_factor
                ),
            });
        }

        for (i, label) in self.exclusive_labels.iter().enumerate() {
            if label.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("scoring.exclusive_labels[{i}]"),
                    message: "Label names must not be empty".to_string(),
                });
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if !(0.0..=100.0).contains(&min_score) {
                errors.push(ConfigError {
                    field: "behavior.min_score".to_string(),
                    message: format!("Minimum score must be between 0 and 100, got {min_score}"),
                });
            }
        }
        errors
    }
}

impl Validatable for ScoreConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.recipe_path.exists() {
            errors.push(ConfigError {
                field: "recipe_path".to_string(),
                message: format!("File not found: {}", self.recipe_path.display()),
            });
        }
        if !self.data_dir.is_dir() {
            errors.push(ConfigError {
                field: "reference.data_dir".to_string(),
                message: format!("Directory not found: {}", self.data_dir.display()),
            });
        }

        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_positive_packaging_floor_rejected() {
        let config = ScoringConfig {
            max_product_packaging_malus: 5.0,
            ..ScoringConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.max_product_packaging_malus");
    }

    #[test]
    fn test_negative_caps_rejected() {
        let config = ScoringConfig {
            max_product_label_bonus: -1.0,
            max_recipe_bonus: -1.0,
            ..ScoringConfig::default()
        };
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let config = ScoringConfig {
            transport_factor: f64::NAN,
            ..ScoringConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("finite"));
    }

    #[test]
    fn test_empty_exclusive_label_rejected() {
        let config = ScoringConfig {
            exclusive_labels: vec!["ASC".to_string(), " ".to_string()],
            ..ScoringConfig::default()
        };
        assert_eq!(config.validate()[0].field, "scoring.exclusive_labels[1]");
    }

    #[test]
    fn test_min_score_range() {
        let valid = BehaviorConfig {
            min_score: Some(60.0),
            ..BehaviorConfig::default()
        };
        assert!(valid.is_valid());

        let invalid = BehaviorConfig {
            min_score: Some(120.0),
            ..BehaviorConfig::default()
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "scoring.max_recipe_bonus".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(error.to_string(), "scoring.max_recipe_bonus: bad");
    }
}
