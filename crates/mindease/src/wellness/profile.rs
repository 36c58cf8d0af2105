//! User-owned state: profile, mood history, and the persisted snapshot the
//! store/sync ports move around.

use serde::{Deserialize, Serialize};

use super::assessments::TestResult;
use super::environment::EnvironmentData;
use super::lifestyle::LifestyleData;
use super::ports::PlaylistRecommendation;

/// Fixed key the snapshot is persisted under.
pub const STORAGE_KEY: &str = "mindease_userdata";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Anxious,
    Sad,
    Overwhelmed,
}

impl Mood {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Anxious => "Anxious",
            Self::Sad => "Sad",
            Self::Overwhelmed => "Overwhelmed",
        }
    }
}

/// Tone the chat provider should answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStyle {
    Compassionate,
    Direct,
    Scientific,
    Reflective,
}

impl Default for ResponseStyle {
    fn default() -> Self {
        Self::Compassionate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub gender: String,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle_factors: Option<LifestyleData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

/// The aggregate persisted under [`STORAGE_KEY`] and shipped to the remote
/// sync endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub mood_history: Vec<MoodEntry>,
    #[serde(default)]
    pub test_results: Vec<TestResult>,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub personality_test_complete: bool,
    #[serde(default)]
    pub response_style: ResponseStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_vibe: Option<String>,
    #[serde(default)]
    pub recommended_playlists: Vec<PlaylistRecommendation>,
}

impl UserSnapshot {
    /// Remote sync only happens for snapshots that can be attributed to an
    /// account, i.e. a profile with a non-empty email.
    pub fn sync_eligible(&self) -> bool {
        self.profile
            .as_ref()
            .map(|profile| !profile.email.trim().is_empty())
            .unwrap_or(false)
    }
}
