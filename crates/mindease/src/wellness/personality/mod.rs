//! Four-axis personality typing over a fixed 24-statement battery.

mod battery;
mod domain;
mod session;
mod types;

pub use battery::PersonalityBattery;
pub use domain::{AxisScores, TraitAxis, TraitStatement};
pub use session::{PersonalityError, PersonalityOutcome, PersonalityQuiz, QuizProgress};
pub use types::{type_profile, TypeProfile};
