//! Standardized self-report questionnaires and the traversal engine that
//! scores them.

mod catalog;
mod domain;
mod session;

pub use catalog::{Instrument, InstrumentCatalog};
pub use domain::{AnswerOption, InstrumentCategory, InstrumentId, TestResult};
pub use session::{AssessmentError, AssessmentSession, SessionProgress};
