//! Product origin: a producing country or an FAO fishing zone.

use serde::{Deserialize, Serialize};

/// Producing country with its optional origin and transport scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_score: Option<f64>,
}

impl Country {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin_score: None,
            transport_score: None,
        }
    }

    #[must_use]
    pub fn with_origin_score(mut self, score: f64) -> Self {
        self.origin_score = Some(score);
        self
    }

    #[must_use]
    pub fn with_transport_score(mut self, score: f64) -> Self {
        self.transport_score = Some(score);
        self
    }
}

/// FAO major fishing area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaoZone {
    pub fao_id: u32,
    pub ocean: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_score: Option<f64>,
}

impl FaoZone {
    #[must_use]
    pub fn new(fao_id: u32, ocean: impl Into<String>) -> Self {
        Self {
            fao_id,
            ocean: ocean.into(),
            transport_score: None,
        }
    }

    #[must_use]
    pub fn with_transport_score(mut self, score: f64) -> Self {
        self.transport_score = Some(score);
        self
    }
}

/// Where a product comes from. Exactly one variant applies at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Origin {
    Country(Country),
    FaoZone(FaoZone),
}

impl Origin {
    /// Transport score, whatever the variant.
    #[must_use]
    pub const fn transport_score(&self) -> Option<f64> {
        match self {
            Self::Country(country) => country.transport_score,
            Self::FaoZone(zone) => zone.transport_score,
        }
    }

    /// Origin score; only countries carry one.
    #[must_use]
    pub const fn origin_score(&self) -> Option<f64> {
        match self {
            Self::Country(country) => country.origin_score,
            Self::FaoZone(_) => None,
        }
    }

    /// FAO zone id when the product was fished.
    #[must_use]
    pub const fn fao_id(&self) -> Option<u32> {
        match self {
            Self::Country(_) => None,
            Self::FaoZone(zone) => Some(zone.fao_id),
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Country(country) => country.name.clone(),
            Self::FaoZone(zone) => format!("FAO {} ({})", zone.fao_id, zone.ocean),
        }
    }
}

impl From<Country> for Origin {
    fn from(country: Country) -> Self {
        Self::Country(country)
    }
}

impl From<FaoZone> for Origin {
    fn from(zone: FaoZone) -> Self {
        Self::FaoZone(zone)
    }
}
