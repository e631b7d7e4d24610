//! Points-to-score transform and letter grading.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest and highest reachable score.
pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

/// Clamp a value into [`SCORE_RANGE`].
///
/// NaN is mapped to the lower bound.
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return SCORE_RANGE.0;
    }
    value.clamp(SCORE_RANGE.0, SCORE_RANGE.1)
}

/// Turn environmental impact points into a base score in `[0, 100]`.
///
/// `100 - ln(10p + 1) / ln(2 + 1 / (100 p^4)) * 20`, clamped. Zero, negative
/// and NaN points give a perfect score. The curve is non-increasing and
/// reaches 0 a little above 3.1 points.
#[must_use]
pub fn base_score_from_points(points: f64) -> f64 {
    if !(points > 0.0) {
        return SCORE_RANGE.1;
    }

    let numerator = (10.0 * points + 1.0).ln();
    let denominator = (2.0 + 1.0 / (100.0 * points.powi(4))).ln();
    let score = 100.0 - (numerator / denominator) * 20.0;

    if score.is_nan() {
        SCORE_RANGE.0
    } else {
        clamp_score(score)
    }
}

/// Letter class of a green score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GreenScoreGrade {
    /// 90 and above
    #[serde(rename = "A+")]
    APlus,
    /// 75 to 90
    A,
    /// 60 to 75
    B,
    /// 45 to 60
    C,
    /// 30 to 45
    D,
    /// 15 to 30
    E,
    /// Below 15
    F,
}

impl GreenScoreGrade {
    /// Classify a score. Lower bounds are inclusive, NaN is `F`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::APlus,
            s if s >= 75.0 => Self::A,
            s if s >= 60.0 => Self::B,
            s if s >= 45.0 => Self::C,
            s if s >= 30.0 => Self::D,
            s if s >= 15.0 => Self::E,
            _ => Self::F,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::APlus => "Excellent",
            Self::A => "Very good",
            Self::B => "Good",
            Self::C => "Average",
            Self::D => "Poor",
            Self::E => "Bad",
            Self::F => "Very bad",
        }
    }

    /// All grades from best to worst.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::APlus,
            Self::A,
            Self::B,
            Self::C,
            Self::D,
            Self::E,
            Self::F,
        ]
    }
}

impl fmt::Display for GreenScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
