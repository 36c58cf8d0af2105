use std::sync::Arc;

use chrono::Local;
use tracing::{debug, warn};

use super::assessments::TestResult;
use super::environment::{EnvironmentData, EnvironmentRating};
use super::lifestyle::{assess_lifestyle, LifestyleData, RiskFinding};
use super::personality::PersonalityOutcome;
use super::ports::{SnapshotPublisher, SnapshotStore, StoreError};
use super::profile::{Mood, MoodEntry, UserSnapshot, STORAGE_KEY};

/// Service composing the snapshot store and the remote sync publisher.
/// Every mutation persists the snapshot and then offers it for sync; the
/// publish leg is fire-and-forget and never fails the mutation.
pub struct CompanionService<S, P> {
    store: Arc<S>,
    publisher: Arc<P>,
}

impl<S, P> CompanionService<S, P>
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    pub fn new(store: Arc<S>, publisher: Arc<P>) -> Self {
        Self { store, publisher }
    }

    /// Current snapshot, or an empty default when nothing was persisted yet.
    pub fn load(&self) -> Result<UserSnapshot, CompanionServiceError> {
        Ok(self.store.load(STORAGE_KEY)?.unwrap_or_default())
    }

    /// Append a finished questionnaire result to the history.
    pub fn record_test_result(
        &self,
        result: TestResult,
    ) -> Result<UserSnapshot, CompanionServiceError> {
        let mut snapshot = self.load()?;
        snapshot.test_results.push(result);
        self.persist(snapshot)
    }

    /// Log today's mood check-in.
    pub fn record_mood(&self, mood: Mood) -> Result<UserSnapshot, CompanionServiceError> {
        let mut snapshot = self.load()?;
        snapshot.mood_history.push(MoodEntry {
            date: Local::now().format("%Y-%m-%d").to_string(),
            mood,
        });
        self.persist(snapshot)
    }

    /// Store the resolved type on the profile, when one exists.
    pub fn record_personality(
        &self,
        outcome: &PersonalityOutcome,
    ) -> Result<UserSnapshot, CompanionServiceError> {
        let mut snapshot = self.load()?;
        snapshot.personality_test_complete = true;
        if let Some(profile) = snapshot.profile.as_mut() {
            profile.personality_type = Some(outcome.name.to_string());
            profile.personality_description = Some(outcome.description.to_string());
        }
        self.persist(snapshot)
    }

    /// Commit the lifestyle blueprint and return the recomputed findings.
    /// Findings are derived, never stored.
    pub fn finalize_lifestyle(
        &self,
        data: LifestyleData,
    ) -> Result<(UserSnapshot, Vec<RiskFinding>), CompanionServiceError> {
        let findings = assess_lifestyle(&data);
        let mut snapshot = self.load()?;
        if let Some(profile) = snapshot.profile.as_mut() {
            profile.lifestyle_factors = Some(data);
        }
        let snapshot = self.persist(snapshot)?;
        Ok((snapshot, findings))
    }

    /// Commit the environment sliders and return the derived index.
    pub fn record_environment(
        &self,
        data: EnvironmentData,
    ) -> Result<(UserSnapshot, f32, EnvironmentRating), CompanionServiceError> {
        let score = data.impact_score();
        let rating = data.rating();
        let mut snapshot = self.load()?;
        snapshot.environment = Some(data);
        let snapshot = self.persist(snapshot)?;
        Ok((snapshot, score, rating))
    }

    /// Replace the snapshot wholesale (sync endpoint / client import).
    pub fn import(&self, snapshot: UserSnapshot) -> Result<UserSnapshot, CompanionServiceError> {
        self.persist(snapshot)
    }

    fn persist(&self, snapshot: UserSnapshot) -> Result<UserSnapshot, CompanionServiceError> {
        self.store.save(STORAGE_KEY, &snapshot)?;

        if snapshot.sync_eligible() {
            if let Err(err) = self.publisher.publish(snapshot.clone()) {
                warn!(error = %err, "snapshot sync dispatch failed; keeping local copy");
            }
        } else {
            debug!("snapshot has no account email; skipping remote sync");
        }

        Ok(snapshot)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompanionServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
