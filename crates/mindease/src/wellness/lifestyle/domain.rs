use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Exercise modalities a user can log for a typical week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Walking,
    Yoga,
    Strength,
    Aerobic,
    Other,
}

impl ExerciseType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Yoga => "Yoga",
            Self::Strength => "Strength",
            Self::Aerobic => "Aerobic",
            Self::Other => "Other",
        }
    }
}

/// Self-reported ultra-processed-food intake frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietUpfFrequency {
    Daily,
    Often,
    Sometimes,
    Never,
}

impl DietUpfFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Often => "Often",
            Self::Sometimes => "Sometimes",
            Self::Never => "Never",
        }
    }
}

/// Self-reported loneliness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LonelinessLevel {
    High,
    Moderate,
    Low,
    None,
}

impl LonelinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::None => "None",
        }
    }
}

/// The committed lifestyle blueprint. Range checking of the numeric fields
/// (sleep hours, days 0..7, the two 1..10 levels) is a form-layer concern;
/// the classifier only assumes finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleData {
    pub sleep_hours: f32,
    pub sleep_awakenings: bool,
    pub exercise_days: u8,
    pub exercise_types: BTreeSet<ExerciseType>,
    pub diet_upf: DietUpfFrequency,
    pub diet_mediterranean: bool,
    pub social_lives_alone: bool,
    pub social_loneliness: LonelinessLevel,
    pub screen_before_bed: bool,
    /// Minutes of daily sunlight exposure.
    pub sunlight_exposure: u16,
    /// Sense-of-purpose rating, 1..=10.
    pub purpose_level: u8,
    /// Routine predictability rating, 1..=10.
    pub routine_predictability: u8,
}
