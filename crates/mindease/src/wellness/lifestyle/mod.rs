//! Rule-based risk classification over the committed lifestyle blueprint.

mod domain;
mod rules;

pub use domain::{DietUpfFrequency, ExerciseType, LifestyleData, LonelinessLevel};
pub use rules::{assess_lifestyle, RiskFactor, RiskFinding, RiskLabel, RiskSeverity};
