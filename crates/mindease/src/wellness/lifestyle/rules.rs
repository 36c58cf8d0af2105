use serde::{Deserialize, Serialize};

use super::domain::{DietUpfFrequency, ExerciseType, LifestyleData, LonelinessLevel};

/// Rule categories, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Sleep,
    Exercise,
    Social,
    Diet,
}

impl RiskFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Sleep",
            Self::Exercise => "Exercise",
            Self::Social => "Social",
            Self::Diet => "Diet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Critical,
    Warning,
    Optimal,
}

impl RiskSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Optimal => "Optimal",
        }
    }
}

/// Risk-bucket keys emitted by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    SleepHighMortality,
    SleepElevatedMental,
    SleepOptimalRecovery,
    ExerciseLowActivity,
    ExerciseHighImpact,
    SocialMortality,
    DietHighAnxiety,
}

impl RiskLabel {
    pub const fn headline(self) -> &'static str {
        match self {
            Self::SleepHighMortality => "High mortality risk",
            Self::SleepElevatedMental => "Elevated mental illness risk",
            Self::SleepOptimalRecovery => "Optimal recovery window",
            Self::ExerciseLowActivity => "Low activity impact",
            Self::ExerciseHighImpact => "High-impact modalities used",
            Self::SocialMortality => "Increased mortality risk",
            Self::DietHighAnxiety => "High anxiety/depression correlation",
        }
    }
}

/// One risk/status conclusion for a single factor. Ephemeral: recomputed
/// from the blueprint on every change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub factor: RiskFactor,
    pub label: RiskLabel,
    pub severity: RiskSeverity,
    pub citation: &'static str,
}

/// Classify the committed blueprint into 1..=4 findings, evaluated in
/// fixed order: sleep, exercise, social, diet. Sleep always contributes a
/// finding; the other three rules fire conditionally.
pub fn assess_lifestyle(data: &LifestyleData) -> Vec<RiskFinding> {
    let mut findings = Vec::with_capacity(4);

    // Sleep (Vedaa et al. 2024, Shah et al. 2025)
    if data.sleep_hours < 5.0 {
        findings.push(RiskFinding {
            factor: RiskFactor::Sleep,
            label: RiskLabel::SleepHighMortality,
            severity: RiskSeverity::Critical,
            citation: "Shah et al. 2025",
        });
    } else if data.sleep_hours < 8.0 {
        findings.push(RiskFinding {
            factor: RiskFactor::Sleep,
            label: RiskLabel::SleepElevatedMental,
            severity: RiskSeverity::Warning,
            citation: "Vedaa et al. 2024",
        });
    } else {
        findings.push(RiskFinding {
            factor: RiskFactor::Sleep,
            label: RiskLabel::SleepOptimalRecovery,
            severity: RiskSeverity::Optimal,
            citation: "Vedaa et al. 2024",
        });
    }

    // Exercise (Noetel et al. 2024). The frequency check wins over the
    // modality check, and someone active >= 2 days with only Aerobic/Other
    // logged yields no finding at all — the rule is intentionally partial.
    if data.exercise_days < 2 {
        findings.push(RiskFinding {
            factor: RiskFactor::Exercise,
            label: RiskLabel::ExerciseLowActivity,
            severity: RiskSeverity::Warning,
            citation: "Noetel et al. 2024",
        });
    } else if [ExerciseType::Yoga, ExerciseType::Strength, ExerciseType::Walking]
        .iter()
        .any(|modality| data.exercise_types.contains(modality))
    {
        findings.push(RiskFinding {
            factor: RiskFactor::Exercise,
            label: RiskLabel::ExerciseHighImpact,
            severity: RiskSeverity::Optimal,
            citation: "Noetel et al. 2024",
        });
    }

    // Social (Wang et al. 2023): only the compounded condition fires.
    if data.social_lives_alone && data.social_loneliness == LonelinessLevel::High {
        findings.push(RiskFinding {
            factor: RiskFactor::Social,
            label: RiskLabel::SocialMortality,
            severity: RiskSeverity::Critical,
            citation: "Wang et al. 2023",
        });
    }

    // Diet (Lane et al. 2022)
    if data.diet_upf == DietUpfFrequency::Daily {
        findings.push(RiskFinding {
            factor: RiskFactor::Diet,
            label: RiskLabel::DietHighAnxiety,
            severity: RiskSeverity::Critical,
            citation: "Lane et al. 2022",
        });
    }

    findings
}
