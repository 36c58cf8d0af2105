//! Boundaries to external collaborators. The core only supplies and
//! consumes the typed records; adapters own the actual I/O.

use serde::{Deserialize, Serialize};

use super::assessments::TestResult;
use super::profile::{Mood, ResponseStyle, UserProfile, UserSnapshot};

/// Key-value persistence abstraction over the snapshot, so the service
/// module can be exercised in isolation.
pub trait SnapshotStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<UserSnapshot>, StoreError>;
    fn save(&self, key: &str, snapshot: &UserSnapshot) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("corrupt snapshot under '{key}': {detail}")]
    Corrupt { key: String, detail: String },
}

/// Outbound snapshot sync. Fire-and-forget: implementations may dispatch
/// asynchronously and report only transport setup failures.
pub trait SnapshotPublisher: Send + Sync {
    fn publish(&self, snapshot: UserSnapshot) -> Result<(), PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("sync transport unavailable: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

/// Everything the language-model backend needs to ground one reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<ChatMessage>,
    pub mood: Option<Mood>,
    pub profile: Option<UserProfile>,
    pub language: String,
    pub test_results: Vec<TestResult>,
    pub response_style: ResponseStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_vibe: Option<String>,
}

/// One incremental piece of a streamed reply, optionally carrying
/// grounding citations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFragment {
    pub text: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

/// Streaming chat boundary. The returned iterator yields fragments in
/// arrival order; the core never retries or inspects transport state.
pub trait ChatProvider: Send + Sync {
    fn stream_reply(
        &self,
        request: ChatRequest,
    ) -> Result<Box<dyn Iterator<Item = ChatFragment> + Send>, ProviderError>;
}

/// Enriched narrative for a resolved personality type, produced remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityInsights {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub career: String,
    pub relationships: String,
    pub coping_advice: String,
}

pub trait InsightProvider: Send + Sync {
    fn personality_insights(&self, type_code: &str) -> Result<PersonalityInsights, ProviderError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecommendation {
    pub id: String,
    pub title: String,
    pub uri: String,
    pub description: String,
}

pub trait MusicRecommender: Send + Sync {
    fn recommend(
        &self,
        mood: Mood,
        profile: &UserProfile,
    ) -> Result<Vec<PlaylistRecommendation>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unreachable: {0}")]
    Unreachable(String),
    /// The upstream free tier returns HTTP 429 when exhausted.
    #[error("provider quota exhausted")]
    QuotaExhausted,
}
