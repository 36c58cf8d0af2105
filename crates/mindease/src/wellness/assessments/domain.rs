use serde::{Deserialize, Serialize};

/// Stable identifiers for the six catalog instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentId {
    Wleis,
    Phq9,
    Gad7,
    Pss10,
    Isi,
    Asrs,
}

impl InstrumentId {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Wleis,
            Self::Phq9,
            Self::Gad7,
            Self::Pss10,
            Self::Isi,
            Self::Asrs,
        ]
    }

    /// URL-safe slug used by the HTTP surface.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Wleis => "wleis",
            Self::Phq9 => "phq9",
            Self::Gad7 => "gad7",
            Self::Pss10 => "pss10",
            Self::Isi => "isi",
            Self::Asrs => "asrs",
        }
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|id| id.slug() == raw.trim().to_ascii_lowercase())
    }
}

/// Browsing categories shown in the catalog picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentCategory {
    Mood,
    Stress,
    Behavior,
    Adhd,
    Intelligence,
}

impl InstrumentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mood => "Mood",
            Self::Stress => "Stress",
            Self::Behavior => "Behavior",
            Self::Adhd => "ADHD",
            Self::Intelligence => "Intelligence",
        }
    }
}

/// A selectable choice mapped to its numeric contribution. Within one
/// instrument, option values rise monotonically with severity/agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: u32,
}

/// Outcome of a completed questionnaire traversal. Immutable once created;
/// callers append it to the snapshot's result history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub test_name: String,
    pub score: u32,
    pub max_score: u32,
    pub interpretation: String,
    pub date: String,
}
