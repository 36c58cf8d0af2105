//! Scoring, typing, and classification core for the wellness companion.
//!
//! The engines are synchronous and free of I/O: questionnaires and
//! batteries are fixed catalog data, scoring is either a pure function or
//! a small explicit state machine, and all persistence and remote
//! intelligence is reached through the traits in [`ports`]. The [`router`]
//! module exposes the engines over HTTP for hosts that want them.

pub mod assessments;
pub mod environment;
pub mod lifestyle;
pub mod personality;
pub mod ports;
pub mod profile;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use assessments::{
    AnswerOption, AssessmentError, AssessmentSession, Instrument, InstrumentCatalog,
    InstrumentCategory, InstrumentId, SessionProgress, TestResult,
};
pub use environment::{EnvironmentData, EnvironmentRating};
pub use lifestyle::{
    assess_lifestyle, DietUpfFrequency, ExerciseType, LifestyleData, LonelinessLevel, RiskFactor,
    RiskFinding, RiskLabel, RiskSeverity,
};
pub use personality::{
    AxisScores, PersonalityBattery, PersonalityError, PersonalityOutcome, PersonalityQuiz,
    QuizProgress, TraitAxis, TraitStatement,
};
pub use ports::{
    ChatFragment, ChatProvider, ChatRequest, InsightProvider, MusicRecommender,
    PersonalityInsights, PlaylistRecommendation, ProviderError, PublishError, SnapshotPublisher,
    SnapshotStore, StoreError,
};
pub use profile::{Mood, MoodEntry, ResponseStyle, UserProfile, UserSnapshot, STORAGE_KEY};
pub use router::wellness_router;
pub use service::{CompanionService, CompanionServiceError};
