//! Environment impact: mean of four bounded sliders mapped to a 4-tier
//! qualitative rating. Stateless; recomputed on every read.

use serde::{Deserialize, Serialize};

/// Four 1..=10 slider readings describing the user's surroundings. Higher
/// is better for mental health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentData {
    pub physical: u8,
    pub social: u8,
    pub economic: u8,
    pub built: u8,
}

impl EnvironmentData {
    /// Unweighted arithmetic mean of the four factors.
    pub fn impact_score(&self) -> f32 {
        f32::from(
            u16::from(self.physical)
                + u16::from(self.social)
                + u16::from(self.economic)
                + u16::from(self.built),
        ) / 4.0
    }

    pub fn rating(&self) -> EnvironmentRating {
        EnvironmentRating::from_score(self.impact_score())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentRating {
    Nurturing,
    Stable,
    Demanding,
    CriticalSupport,
}

impl EnvironmentRating {
    /// Inclusive lower bounds, highest first.
    pub fn from_score(score: f32) -> Self {
        if score >= 8.0 {
            Self::Nurturing
        } else if score >= 6.0 {
            Self::Stable
        } else if score >= 4.0 {
            Self::Demanding
        } else {
            Self::CriticalSupport
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nurturing => "Nurturing",
            Self::Stable => "Stable",
            Self::Demanding => "Demanding",
            Self::CriticalSupport => "Critical Support Needed",
        }
    }
}
