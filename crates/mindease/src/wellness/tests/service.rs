use std::sync::Arc;

use super::common::{lifestyle, profile, service, InMemoryStore, RecordingPublisher};
use crate::wellness::assessments::TestResult;
use crate::wellness::environment::{EnvironmentData, EnvironmentRating};
use crate::wellness::lifestyle::{DietUpfFrequency, ExerciseType, LonelinessLevel, RiskFactor};
use crate::wellness::personality::PersonalityQuiz;
use crate::wellness::profile::{Mood, UserSnapshot, STORAGE_KEY};
use crate::wellness::ports::SnapshotStore;

fn sample_result() -> TestResult {
    TestResult {
        id: "1700000000000-0001".to_string(),
        test_name: "Peace & Focus (GAD-7)".to_string(),
        score: 6,
        max_score: 21,
        interpretation: "Light Awareness".to_string(),
        date: "2026-08-23".to_string(),
    }
}

#[test]
fn load_returns_a_default_snapshot_when_nothing_is_stored() {
    let service = service(
        Arc::new(InMemoryStore::default()),
        Arc::new(RecordingPublisher::default()),
    );
    let snapshot = service.load().unwrap();
    assert_eq!(snapshot, UserSnapshot::default());
}

#[test]
fn recorded_results_accumulate_under_the_fixed_key() {
    let store = Arc::new(InMemoryStore::default());
    let service = service(Arc::clone(&store), Arc::new(RecordingPublisher::default()));

    service.record_test_result(sample_result()).unwrap();
    let snapshot = service.record_test_result(sample_result()).unwrap();
    assert_eq!(snapshot.test_results.len(), 2);

    let persisted = store.load(STORAGE_KEY).unwrap().unwrap();
    assert_eq!(persisted, snapshot);
}

#[test]
fn mood_entries_are_dated_and_appended() {
    let service = service(
        Arc::new(InMemoryStore::default()),
        Arc::new(RecordingPublisher::default()),
    );
    let snapshot = service.record_mood(Mood::Anxious).unwrap();
    assert_eq!(snapshot.mood_history.len(), 1);
    assert_eq!(snapshot.mood_history[0].mood, Mood::Anxious);
    assert!(!snapshot.mood_history[0].date.is_empty());
}

#[test]
fn anonymous_snapshots_are_stored_but_never_published() {
    let publisher = Arc::new(RecordingPublisher::default());
    let service = service(Arc::new(InMemoryStore::default()), Arc::clone(&publisher));

    service.record_mood(Mood::Good).unwrap();
    assert!(publisher.published().is_empty());
}

#[test]
fn snapshots_with_an_account_email_are_offered_for_sync() {
    let publisher = Arc::new(RecordingPublisher::default());
    let service = service(Arc::new(InMemoryStore::default()), Arc::clone(&publisher));

    let mut snapshot = UserSnapshot::default();
    snapshot.profile = Some(profile("asha@example.com"));
    service.import(snapshot).unwrap();
    service.record_mood(Mood::Okay).unwrap();

    let published = publisher.published();
    assert_eq!(published.len(), 2);
    assert_eq!(published[1].mood_history.len(), 1);
}

#[test]
fn whitespace_email_does_not_qualify_for_sync() {
    let publisher = Arc::new(RecordingPublisher::default());
    let service = service(Arc::new(InMemoryStore::default()), Arc::clone(&publisher));

    let mut snapshot = UserSnapshot::default();
    snapshot.profile = Some(profile("   "));
    service.import(snapshot).unwrap();
    assert!(publisher.published().is_empty());
}

#[test]
fn publish_failures_never_fail_the_mutation() {
    let store = Arc::new(InMemoryStore::default());
    let service = service(Arc::clone(&store), Arc::new(RecordingPublisher::failing()));

    let mut snapshot = UserSnapshot::default();
    snapshot.profile = Some(profile("asha@example.com"));
    service.import(snapshot).unwrap();
    let stored = service.record_mood(Mood::Sad).unwrap();
    assert_eq!(stored.mood_history.len(), 1);
    assert_eq!(store.load(STORAGE_KEY).unwrap(), Some(stored));
}

#[test]
fn personality_outcome_lands_on_the_profile() {
    let service = service(
        Arc::new(InMemoryStore::default()),
        Arc::new(RecordingPublisher::default()),
    );

    let mut snapshot = UserSnapshot::default();
    snapshot.profile = Some(profile("asha@example.com"));
    service.import(snapshot).unwrap();

    let outcome = PersonalityQuiz::resolve_vector(&[0; 24]).unwrap();
    let snapshot = service.record_personality(&outcome).unwrap();

    assert!(snapshot.personality_test_complete);
    let stored = snapshot.profile.unwrap();
    assert_eq!(stored.personality_type.as_deref(), Some("The Commander"));
    assert!(stored.personality_description.is_some());
}

#[test]
fn personality_completion_is_flagged_even_without_a_profile() {
    let service = service(
        Arc::new(InMemoryStore::default()),
        Arc::new(RecordingPublisher::default()),
    );
    let outcome = PersonalityQuiz::resolve_vector(&[0; 24]).unwrap();
    let snapshot = service.record_personality(&outcome).unwrap();
    assert!(snapshot.personality_test_complete);
    assert!(snapshot.profile.is_none());
}

#[test]
fn finalize_lifestyle_persists_the_blueprint_and_returns_findings() {
    let service = service(
        Arc::new(InMemoryStore::default()),
        Arc::new(RecordingPublisher::default()),
    );

    let mut snapshot = UserSnapshot::default();
    snapshot.profile = Some(profile("asha@example.com"));
    service.import(snapshot).unwrap();

    let data = lifestyle(
        4.0,
        0,
        &[],
        DietUpfFrequency::Daily,
        true,
        LonelinessLevel::High,
    );
    let (snapshot, findings) = service.finalize_lifestyle(data.clone()).unwrap();

    assert_eq!(findings.len(), 4);
    assert_eq!(findings[0].factor, RiskFactor::Sleep);
    let stored = snapshot.profile.unwrap().lifestyle_factors.unwrap();
    assert_eq!(stored, data);
}

#[test]
fn environment_commit_returns_the_derived_index() {
    let service = service(
        Arc::new(InMemoryStore::default()),
        Arc::new(RecordingPublisher::default()),
    );
    let data = EnvironmentData {
        physical: 9,
        social: 8,
        economic: 8,
        built: 9,
    };
    let (snapshot, score, rating) = service.record_environment(data).unwrap();
    assert_eq!(score, 8.5);
    assert_eq!(rating, EnvironmentRating::Nurturing);
    assert_eq!(snapshot.environment, Some(data));
}

#[test]
fn findings_are_never_persisted_with_the_snapshot() {
    let service = service(
        Arc::new(InMemoryStore::default()),
        Arc::new(RecordingPublisher::default()),
    );
    let data = lifestyle(
        6.0,
        3,
        &[ExerciseType::Walking],
        DietUpfFrequency::Never,
        false,
        LonelinessLevel::Low,
    );
    let (snapshot, _) = service.finalize_lifestyle(data).unwrap();
    let serialized = serde_json::to_value(&snapshot).unwrap();
    assert!(serialized.get("findings").is_none());
}
