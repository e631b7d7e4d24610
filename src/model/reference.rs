//! Reference data records supplied by the catalog.
//!
//! These are immutable values: a product holds its own copy of the category,
//! labels and packagings it was given, so later catalog reloads never change
//! an existing recipe's score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Food category with its Agribalyse impact points (higher is worse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Position of the entry in the reference file
    pub id: usize,
    /// Category name, unique within the catalog
    pub name: String,
    /// Environmental impact points per kilogram
    pub agb_score: f64,
}

impl ProductCategory {
    #[must_use]
    pub fn new(id: usize, name: impl Into<String>, agb_score: f64) -> Self {
        Self {
            id,
            name: name.into(),
            agb_score,
        }
    }
}

/// Production label (organic, MSC, ...) and the bonus it grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLabel {
    pub name: String,
    pub bonus: f64,
}

impl ProductLabel {
    #[must_use]
    pub fn new(name: impl Into<String>, bonus: f64) -> Self {
        Self {
            name: name.into(),
            bonus,
        }
    }
}

/// Packaging format and its malus (usually zero or negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPackaging {
    pub format: String,
    pub bonus: f64,
}

impl ProductPackaging {
    #[must_use]
    pub fn new(format: impl Into<String>, bonus: f64) -> Self {
        Self {
            format: format.into(),
            bonus,
        }
    }
}

/// FAO zones in which a species is considered threatened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFaoIds", into = "RawFaoIds")]
pub enum FaoIds {
    /// Threatened whatever the fishing zone
    All,
    /// Threatened only in the listed zones
    Zones(BTreeSet<u32>),
}

impl FaoIds {
    /// Build a zone set from any iterator of FAO ids.
    pub fn zones(ids: impl IntoIterator<Item = u32>) -> Self {
        Self::Zones(ids.into_iter().collect())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a product fished in `fao_id` is concerned.
    #[must_use]
    pub fn contains(&self, fao_id: u32) -> bool {
        match self {
            Self::All => true,
            Self::Zones(ids) => ids.contains(&fao_id),
        }
    }
}

/// Wire shape of [`FaoIds`]: the keyword `"all"` or a list of ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawFaoIds {
    Keyword(String),
    Ids(BTreeSet<u32>),
}

impl TryFrom<RawFaoIds> for FaoIds {
    type Error = String;

    fn try_from(raw: RawFaoIds) -> Result<Self, Self::Error> {
        match raw {
            RawFaoIds::Keyword(word) if word.eq_ignore_ascii_case("all") => Ok(Self::All),
            RawFaoIds::Keyword(word) => Err(format!(
                "invalid faoIds value '{word}': expected \"all\" or a list of zone ids"
            )),
            RawFaoIds::Ids(ids) => Ok(Self::Zones(ids)),
        }
    }
}

impl From<FaoIds> for RawFaoIds {
    fn from(ids: FaoIds) -> Self {
        match ids {
            FaoIds::All => Self::Keyword("all".to_string()),
            FaoIds::Zones(ids) => Self::Ids(ids),
        }
    }
}

/// Species flagged as threatened, optionally restricted to some FAO zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatenedSpecies {
    pub species: String,
    #[serde(rename = "faoIds", alias = "fao_ids")]
    pub fao_ids: FaoIds,
}

impl ThreatenedSpecies {
    #[must_use]
    pub fn new(species: impl Into<String>, fao_ids: FaoIds) -> Self {
        Self {
            species: species.into(),
            fao_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fao_ids_all_from_keyword() {
        let ids: FaoIds = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(ids, FaoIds::All);
        assert!(ids.contains(27));
    }

    #[test]
    fn test_fao_ids_from_list() {
        let ids: FaoIds = serde_json::from_str("[27, 34]").unwrap();
        assert!(ids.contains(34));
        assert!(!ids.contains(87));
    }

    #[test]
    fn test_fao_ids_rejects_unknown_keyword() {
        let result: Result<FaoIds, _> = serde_json::from_str("\"everywhere\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_threatened_species_serializes_camel_case_field() {
        let species = ThreatenedSpecies::new("Thon rouge", FaoIds::zones([37]));
        let json = serde_json::to_value(&species).unwrap();
        assert_eq!(json["faoIds"], serde_json::json!([37]));
    }
}
