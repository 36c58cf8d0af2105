use std::collections::BTreeSet;
use std::sync::Arc;

use clap::Args;
use mindease::error::AppError;
use mindease::wellness::{
    AssessmentSession, CompanionService, DietUpfFrequency, EnvironmentData, ExerciseType,
    InstrumentCatalog, InstrumentId, LifestyleData, LonelinessLevel, Mood, PersonalityQuiz,
    PublishError, SnapshotPublisher, UserProfile, UserSnapshot,
};

use crate::infra::InMemorySnapshotStore;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print every catalog question instead of just the instrument summaries.
    #[arg(long)]
    pub(crate) list_questions: bool,
    /// Skip the personality battery portion of the demo.
    #[arg(long)]
    pub(crate) skip_personality: bool,
}

#[derive(Default)]
struct ConsolePublisher;

impl SnapshotPublisher for ConsolePublisher {
    fn publish(&self, snapshot: UserSnapshot) -> Result<(), PublishError> {
        println!(
            "  [sync] snapshot offered for sync ({} results, {} mood entries)",
            snapshot.test_results.len(),
            snapshot.mood_history.len()
        );
        Ok(())
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        list_questions,
        skip_personality,
    } = args;

    println!(
        "Wellness companion demo ({})",
        chrono::Local::now().format("%Y-%m-%d")
    );

    let catalog = InstrumentCatalog::standard();
    println!("\nAssessment catalog");
    for instrument in catalog.instruments() {
        println!(
            "- {} [{}]: {} questions, max score {}",
            instrument.name,
            instrument.category.label(),
            instrument.question_count(),
            instrument.max_score()
        );
        if list_questions {
            for (index, question) in instrument.questions.iter().enumerate() {
                println!("    {}. {}", index + 1, question);
            }
        }
    }

    let store = Arc::new(InMemorySnapshotStore::default());
    let service = CompanionService::new(store, Arc::new(ConsolePublisher));

    let mut seed = UserSnapshot::default();
    seed.profile = Some(UserProfile {
        name: "Demo User".to_string(),
        email: "demo@example.com".to_string(),
        dob: "1995-06-01".to_string(),
        gender: "nonbinary".to_string(),
        nationality: "US".to_string(),
        photo_url: None,
        personality_type: None,
        personality_description: None,
        lifestyle_factors: None,
        profession: Some("designer".to_string()),
    });
    seed.onboarding_complete = true;
    service.import(seed)?;

    println!("\nScoring a sample PHQ-9 traversal");
    let phq9 = catalog.get(InstrumentId::Phq9).ok_or_else(|| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "PHQ-9 missing from catalog",
        ))
    })?;
    let answers = [1, 2, 1, 2, 0, 1, 1, 0, 0];
    match AssessmentSession::score_vector(phq9, &answers) {
        Ok(result) => {
            println!(
                "- {}: {}/{} -> {}",
                result.test_name, result.score, result.max_score, result.interpretation
            );
            if let Err(err) = service.record_test_result(result) {
                println!("  Recording unavailable: {err}");
            }
        }
        Err(err) => println!("- Scoring rejected: {err}"),
    }

    if let Err(err) = service.record_mood(Mood::Okay) {
        println!("  Mood check-in unavailable: {err}");
    }

    if !skip_personality {
        println!("\nResolving a sample personality battery");
        let selections: Vec<i8> = (0..24).map(|index| if index % 3 == 0 { 2 } else { -1 }).collect();
        match PersonalityQuiz::resolve_vector(&selections) {
            Ok(outcome) => {
                println!(
                    "- {} ({}): mind {:+}, energy {:+}, nature {:+}, tactics {:+}",
                    outcome.code,
                    outcome.name,
                    outcome.scores.mind,
                    outcome.scores.energy,
                    outcome.scores.nature,
                    outcome.scores.tactics
                );
                if let Err(err) = service.record_personality(&outcome) {
                    println!("  Recording unavailable: {err}");
                }
            }
            Err(err) => println!("- Battery rejected: {err}"),
        }
    }

    println!("\nClassifying a sample lifestyle blueprint");
    let blueprint = LifestyleData {
        sleep_hours: 6.0,
        sleep_awakenings: true,
        exercise_days: 1,
        exercise_types: BTreeSet::from([ExerciseType::Walking]),
        diet_upf: DietUpfFrequency::Daily,
        diet_mediterranean: false,
        social_lives_alone: true,
        social_loneliness: LonelinessLevel::High,
        screen_before_bed: true,
        sunlight_exposure: 15,
        purpose_level: 5,
        routine_predictability: 4,
    };
    match service.finalize_lifestyle(blueprint) {
        Ok((_, findings)) => {
            for finding in findings {
                println!(
                    "- [{}] {}: {} ({})",
                    finding.severity.label(),
                    finding.factor.label(),
                    finding.label.headline(),
                    finding.citation
                );
            }
        }
        Err(err) => println!("- Classification unavailable: {err}"),
    }

    println!("\nScoring a sample environment");
    let environment = EnvironmentData {
        physical: 7,
        social: 5,
        economic: 4,
        built: 6,
    };
    match service.record_environment(environment) {
        Ok((_, score, rating)) => {
            println!("- Impact score {:.2} -> {}", score, rating.label());
        }
        Err(err) => println!("- Scoring unavailable: {err}"),
    }

    match service.load() {
        Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("\nFinal snapshot:\n{json}"),
            Err(err) => println!("\nFinal snapshot unavailable: {err}"),
        },
        Err(err) => println!("\nFinal snapshot unavailable: {err}"),
    }

    Ok(())
}
