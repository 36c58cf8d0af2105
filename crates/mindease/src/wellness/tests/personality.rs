use crate::wellness::personality::{
    PersonalityError, PersonalityQuiz, QuizProgress, TraitAxis,
};

/// Selections that agree with every positively keyed statement and
/// disagree with every negatively keyed one, pushing all four axis totals
/// to +18.
fn aligned_selections() -> Vec<i8> {
    let battery = crate::wellness::personality::PersonalityBattery::standard();
    battery
        .statements()
        .iter()
        .map(|statement| 3 * statement.weight)
        .collect()
}

#[test]
fn battery_is_four_balanced_blocks_of_six() {
    let battery = crate::wellness::personality::PersonalityBattery::standard();
    assert_eq!(battery.len(), 24);
    for axis in TraitAxis::ordered() {
        let block: Vec<_> = battery
            .statements()
            .iter()
            .filter(|statement| statement.axis == axis)
            .collect();
        assert_eq!(block.len(), 6, "{} block", axis.label());
        let keying: i32 = block.iter().map(|s| i32::from(s.weight)).sum();
        assert_eq!(keying, 0, "{} block keying must balance", axis.label());
    }
}

#[test]
fn aligned_agreement_resolves_to_commander() {
    let outcome = PersonalityQuiz::resolve_vector(&aligned_selections()).unwrap();
    assert_eq!(outcome.code, "ENTJ");
    assert_eq!(outcome.name, "The Commander");
    for axis in TraitAxis::ordered() {
        assert_eq!(outcome.scores.get(axis), 18, "{}", axis.label());
    }
}

#[test]
fn negated_agreement_flips_every_letter() {
    let selections: Vec<i8> = aligned_selections().iter().map(|s| -s).collect();
    let outcome = PersonalityQuiz::resolve_vector(&selections).unwrap();
    assert_eq!(outcome.code, "ISFP");
    assert_eq!(outcome.name, "The Adventurer");
    for axis in TraitAxis::ordered() {
        assert_eq!(outcome.scores.get(axis), -18, "{}", axis.label());
    }
}

#[test]
fn a_single_negative_axis_flips_only_that_letter() {
    let mut selections = aligned_selections();
    for selection in selections.iter_mut().take(6) {
        *selection = -*selection;
    }
    let outcome = PersonalityQuiz::resolve_vector(&selections).unwrap();
    assert_eq!(outcome.code, "INTJ");
    assert_eq!(outcome.name, "The Architect");
    assert_eq!(outcome.scores.mind, -18);
    assert_eq!(outcome.scores.energy, 18);
}

#[test]
fn uniform_agreement_ties_every_axis_to_the_positive_pole() {
    // Balanced keying makes constant selections cancel within each block,
    // and a zero total resolves to E/N/T/J.
    let outcome = PersonalityQuiz::resolve_vector(&[3; 24]).unwrap();
    for axis in TraitAxis::ordered() {
        assert_eq!(outcome.scores.get(axis), 0, "{}", axis.label());
    }
    assert_eq!(outcome.code, "ENTJ");

    let neutral = PersonalityQuiz::resolve_vector(&[0; 24]).unwrap();
    assert_eq!(neutral.code, "ENTJ");
}

#[test]
fn stepwise_quiz_requires_a_selection_before_each_advance() {
    let mut quiz = PersonalityQuiz::new();
    assert_eq!(quiz.current_step(), Some(0));

    let err = quiz.advance().unwrap_err();
    assert!(matches!(err, PersonalityError::NoSelection { step: 0 }));

    quiz.select(2).unwrap();
    let progress = quiz.advance().unwrap();
    assert_eq!(progress, QuizProgress::InProgress { next_step: 1 });

    // The pending selection does not carry over to the next statement.
    let err = quiz.advance().unwrap_err();
    assert!(matches!(err, PersonalityError::NoSelection { step: 1 }));
}

#[test]
fn selections_outside_the_agreement_scale_are_rejected() {
    let mut quiz = PersonalityQuiz::new();
    assert!(matches!(
        quiz.select(4),
        Err(PersonalityError::SelectionOutOfRange(4))
    ));
    assert!(matches!(
        quiz.select(-4),
        Err(PersonalityError::SelectionOutOfRange(-4))
    ));
    quiz.select(3).unwrap();
    quiz.select(-3).unwrap();
}

#[test]
fn finished_quiz_rejects_further_input() {
    let mut quiz = PersonalityQuiz::new();
    let mut finished = None;
    for _ in 0..24 {
        quiz.select(1).unwrap();
        if let QuizProgress::Finished(outcome) = quiz.advance().unwrap() {
            finished = Some(outcome);
        }
    }
    let finished = finished.expect("24 advances must finish the battery");
    assert_eq!(quiz.outcome(), Some(&finished));
    assert_eq!(quiz.current_step(), None);

    assert!(matches!(
        quiz.select(1),
        Err(PersonalityError::AlreadyFinished)
    ));
    assert!(matches!(
        quiz.advance(),
        Err(PersonalityError::AlreadyFinished)
    ));
}

#[test]
fn resolve_vector_rejects_wrong_lengths() {
    let err = PersonalityQuiz::resolve_vector(&[1; 23]).unwrap_err();
    assert!(matches!(
        err,
        PersonalityError::SelectionCountMismatch {
            expected: 24,
            received: 23
        }
    ));
}
