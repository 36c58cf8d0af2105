use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, Utc};

use super::catalog::Instrument;
use super::domain::TestResult;

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

// Time-derived like the upstream client ids, with a sequence suffix so two
// results finalized in the same millisecond stay distinct.
fn next_result_id() -> String {
    let seq = RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{:04}", Utc::now().timestamp_millis(), seq % 10_000)
}

/// Single-instrument traversal: `NotStarted -> InProgress -> Finished`.
/// Exactly one `TestResult` is emitted per completed traversal; partial
/// traversals produce nothing.
#[derive(Debug)]
pub struct AssessmentSession<'a> {
    instrument: &'a Instrument,
    state: SessionState,
}

#[derive(Debug)]
enum SessionState {
    NotStarted,
    InProgress { answers: Vec<u32> },
    Finished { result: TestResult },
}

/// Observable effect of recording one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionProgress {
    InProgress { next_step: usize },
    Finished(TestResult),
}

impl<'a> AssessmentSession<'a> {
    pub fn new(instrument: &'a Instrument) -> Self {
        Self {
            instrument,
            state: SessionState::NotStarted,
        }
    }

    pub fn instrument(&self) -> &Instrument {
        self.instrument
    }

    /// Zero-based index of the question awaiting an answer, `None` once
    /// finished.
    pub fn current_step(&self) -> Option<usize> {
        match &self.state {
            SessionState::NotStarted => Some(0),
            SessionState::InProgress { answers } => Some(answers.len()),
            SessionState::Finished { .. } => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished { .. })
    }

    pub fn result(&self) -> Option<&TestResult> {
        match &self.state {
            SessionState::Finished { result } => Some(result),
            _ => None,
        }
    }

    /// Drive a whole traversal from a complete answer vector, as submitted
    /// by API callers that collected answers up front.
    pub fn score_vector(
        instrument: &'a Instrument,
        answers: &[u32],
    ) -> Result<TestResult, AssessmentError> {
        if answers.len() != instrument.question_count() {
            return Err(AssessmentError::AnswerCountMismatch {
                expected: instrument.question_count(),
                received: answers.len(),
            });
        }

        let mut session = Self::new(instrument);
        for &value in answers {
            session.answer(value)?;
        }
        session
            .result()
            .cloned()
            .ok_or(AssessmentError::AnswerCountMismatch {
                expected: instrument.question_count(),
                received: answers.len(),
            })
    }

    /// Record the answer for the current question, finalizing the result on
    /// the last one.
    pub fn answer(&mut self, value: u32) -> Result<SessionProgress, AssessmentError> {
        if !self.instrument.accepts_value(value) {
            return Err(AssessmentError::ValueOutsideScale {
                instrument: self.instrument.name,
                value,
            });
        }

        let mut answers = match std::mem::replace(&mut self.state, SessionState::NotStarted) {
            SessionState::NotStarted => Vec::with_capacity(self.instrument.question_count()),
            SessionState::InProgress { answers } => answers,
            SessionState::Finished { result } => {
                self.state = SessionState::Finished { result };
                return Err(AssessmentError::AlreadyFinished {
                    instrument: self.instrument.name,
                });
            }
        };

        answers.push(value);

        if answers.len() == self.instrument.question_count() {
            let score: u32 = answers.iter().sum();
            let result = TestResult {
                id: next_result_id(),
                test_name: self.instrument.name.to_string(),
                score,
                max_score: self.instrument.max_score(),
                interpretation: self.instrument.interpret(score).to_string(),
                date: Local::now().format("%Y-%m-%d").to_string(),
            };
            self.state = SessionState::Finished {
                result: result.clone(),
            };
            Ok(SessionProgress::Finished(result))
        } else {
            let next_step = answers.len();
            self.state = SessionState::InProgress { answers };
            Ok(SessionProgress::InProgress { next_step })
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("'{instrument}' traversal already finished")]
    AlreadyFinished { instrument: &'static str },
    #[error("value {value} is not on the '{instrument}' answer scale")]
    ValueOutsideScale {
        instrument: &'static str,
        value: u32,
    },
    #[error("expected {expected} answers, received {received}")]
    AnswerCountMismatch { expected: usize, received: usize },
}
