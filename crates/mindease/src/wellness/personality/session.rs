use serde::Serialize;

use super::battery::PersonalityBattery;
use super::domain::AxisScores;
use super::types::type_profile;

/// Agreement scale accepted per statement: symmetric 7-point, -3..=3.
pub const SELECTION_MIN: i8 = -3;
pub const SELECTION_MAX: i8 = 3;

/// Result of a completed battery traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityOutcome {
    pub code: String,
    pub name: &'static str,
    pub description: &'static str,
    pub scores: AxisScores,
}

/// Observable effect of advancing one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizProgress {
    InProgress { next_step: usize },
    Finished(PersonalityOutcome),
}

/// Battery traversal with an explicit pending selection: a selection must
/// be made before each advance, mirroring the two-tap flow of the client.
#[derive(Debug)]
pub struct PersonalityQuiz {
    battery: PersonalityBattery,
    state: QuizState,
}

#[derive(Debug)]
enum QuizState {
    InProgress {
        step: usize,
        scores: AxisScores,
        pending: Option<i8>,
    },
    Finished {
        outcome: PersonalityOutcome,
    },
}

impl PersonalityQuiz {
    pub fn new() -> Self {
        Self::with_battery(PersonalityBattery::standard())
    }

    pub fn with_battery(battery: PersonalityBattery) -> Self {
        Self {
            battery,
            state: QuizState::InProgress {
                step: 0,
                scores: AxisScores::default(),
                pending: None,
            },
        }
    }

    pub fn current_step(&self) -> Option<usize> {
        match &self.state {
            QuizState::InProgress { step, .. } => Some(*step),
            QuizState::Finished { .. } => None,
        }
    }

    pub fn outcome(&self) -> Option<&PersonalityOutcome> {
        match &self.state {
            QuizState::Finished { outcome } => Some(outcome),
            _ => None,
        }
    }

    /// Stage the agreement selection for the current statement.
    pub fn select(&mut self, selection: i8) -> Result<(), PersonalityError> {
        if !(SELECTION_MIN..=SELECTION_MAX).contains(&selection) {
            return Err(PersonalityError::SelectionOutOfRange(selection));
        }
        match &mut self.state {
            QuizState::InProgress { pending, .. } => {
                *pending = Some(selection);
                Ok(())
            }
            QuizState::Finished { .. } => Err(PersonalityError::AlreadyFinished),
        }
    }

    /// Fold the pending selection into the axis totals and move to the next
    /// statement, resolving the type after the final one.
    pub fn advance(&mut self) -> Result<QuizProgress, PersonalityError> {
        let (step, mut scores, pending) = match &self.state {
            QuizState::InProgress {
                step,
                scores,
                pending,
            } => (*step, *scores, *pending),
            QuizState::Finished { .. } => return Err(PersonalityError::AlreadyFinished),
        };

        let selection = pending.ok_or(PersonalityError::NoSelection { step })?;
        let statement = self.battery.statements()[step];
        scores.apply(statement.axis, selection, statement.weight);

        if step + 1 == self.battery.len() {
            let code = scores.type_code();
            let profile = type_profile(&code)
                .ok_or_else(|| PersonalityError::UnknownTypeCode(code.clone()))?;
            let outcome = PersonalityOutcome {
                code,
                name: profile.name,
                description: profile.description,
                scores,
            };
            self.state = QuizState::Finished {
                outcome: outcome.clone(),
            };
            Ok(QuizProgress::Finished(outcome))
        } else {
            self.state = QuizState::InProgress {
                step: step + 1,
                scores,
                pending: None,
            };
            Ok(QuizProgress::InProgress { next_step: step + 1 })
        }
    }

    /// Drive the whole battery from a complete selection vector.
    pub fn resolve_vector(selections: &[i8]) -> Result<PersonalityOutcome, PersonalityError> {
        let mut quiz = Self::new();
        if selections.len() != quiz.battery.len() {
            return Err(PersonalityError::SelectionCountMismatch {
                expected: quiz.battery.len(),
                received: selections.len(),
            });
        }

        let mut outcome = None;
        for &selection in selections {
            quiz.select(selection)?;
            if let QuizProgress::Finished(finished) = quiz.advance()? {
                outcome = Some(finished);
            }
        }
        outcome.ok_or(PersonalityError::SelectionCountMismatch {
            expected: quiz.battery.len(),
            received: selections.len(),
        })
    }
}

impl Default for PersonalityQuiz {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersonalityError {
    #[error("battery already finished")]
    AlreadyFinished,
    #[error("no selection staged for statement {step}")]
    NoSelection { step: usize },
    #[error("selection {0} outside the -3..=3 agreement scale")]
    SelectionOutOfRange(i8),
    #[error("expected {expected} selections, received {received}")]
    SelectionCountMismatch { expected: usize, received: usize },
    #[error("no type table entry for code '{0}'")]
    UnknownTypeCode(String),
}
