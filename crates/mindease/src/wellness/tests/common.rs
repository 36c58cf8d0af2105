use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::wellness::lifestyle::{
    DietUpfFrequency, ExerciseType, LifestyleData, LonelinessLevel,
};
use crate::wellness::ports::{
    PublishError, SnapshotPublisher, SnapshotStore, StoreError,
};
use crate::wellness::profile::{UserProfile, UserSnapshot};
use crate::wellness::service::CompanionService;

#[derive(Default)]
pub(super) struct InMemoryStore {
    entries: Mutex<HashMap<String, UserSnapshot>>,
}

impl SnapshotStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<UserSnapshot>, StoreError> {
        let guard = self.entries.lock().expect("store mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, snapshot: &UserSnapshot) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().expect("store mutex poisoned");
        guard.insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct RecordingPublisher {
    published: Mutex<Vec<UserSnapshot>>,
    pub(super) fail: bool,
}

impl RecordingPublisher {
    pub(super) fn failing() -> Self {
        Self {
            published: Mutex::default(),
            fail: true,
        }
    }

    pub(super) fn published(&self) -> Vec<UserSnapshot> {
        self.published.lock().expect("publisher mutex poisoned").clone()
    }
}

impl SnapshotPublisher for RecordingPublisher {
    fn publish(&self, snapshot: UserSnapshot) -> Result<(), PublishError> {
        if self.fail {
            return Err(PublishError::Transport("sync endpoint down".to_string()));
        }
        let mut guard = self.published.lock().expect("publisher mutex poisoned");
        guard.push(snapshot);
        Ok(())
    }
}

pub(super) fn service(
    store: Arc<InMemoryStore>,
    publisher: Arc<RecordingPublisher>,
) -> CompanionService<InMemoryStore, RecordingPublisher> {
    CompanionService::new(store, publisher)
}

pub(super) fn profile(email: &str) -> UserProfile {
    UserProfile {
        name: "Asha".to_string(),
        email: email.to_string(),
        dob: "1993-04-12".to_string(),
        gender: "female".to_string(),
        nationality: "IN".to_string(),
        photo_url: None,
        personality_type: None,
        personality_description: None,
        lifestyle_factors: None,
        profession: Some("teacher".to_string()),
    }
}

pub(super) fn lifestyle(
    sleep_hours: f32,
    exercise_days: u8,
    exercise_types: &[ExerciseType],
    diet_upf: DietUpfFrequency,
    lives_alone: bool,
    loneliness: LonelinessLevel,
) -> LifestyleData {
    LifestyleData {
        sleep_hours,
        sleep_awakenings: false,
        exercise_days,
        exercise_types: exercise_types.iter().copied().collect::<BTreeSet<_>>(),
        diet_upf,
        diet_mediterranean: false,
        social_lives_alone: lives_alone,
        social_loneliness: loneliness,
        screen_before_bed: true,
        sunlight_exposure: 20,
        purpose_level: 7,
        routine_predictability: 7,
    }
}
