use serde::{Deserialize, Serialize};

/// The four bipolar trait dimensions, named after the battery's question
/// blocks. Each accumulates independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitAxis {
    /// Extraversion (E) vs. Introversion (I).
    Mind,
    /// iNtuition (N) vs. Sensing (S).
    Energy,
    /// Thinking (T) vs. Feeling (F).
    Nature,
    /// Judging (J) vs. Perceiving (P).
    Tactics,
}

impl TraitAxis {
    pub const fn ordered() -> [Self; 4] {
        [Self::Mind, Self::Energy, Self::Nature, Self::Tactics]
    }

    pub const fn positive_pole(self) -> char {
        match self {
            Self::Mind => 'E',
            Self::Energy => 'N',
            Self::Nature => 'T',
            Self::Tactics => 'J',
        }
    }

    pub const fn negative_pole(self) -> char {
        match self {
            Self::Mind => 'I',
            Self::Energy => 'S',
            Self::Nature => 'F',
            Self::Tactics => 'P',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mind => "Mind",
            Self::Energy => "Energy",
            Self::Nature => "Nature",
            Self::Tactics => "Tactics",
        }
    }
}

/// One battery statement: the prompt, the axis it loads on, and its keying.
/// Negatively keyed statements (`weight == -1`) counterbalance agreement
/// bias within every axis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitStatement {
    pub prompt: &'static str,
    pub axis: TraitAxis,
    pub weight: i8,
}

/// Mutable accumulator over the four axes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScores {
    pub mind: i32,
    pub energy: i32,
    pub nature: i32,
    pub tactics: i32,
}

impl AxisScores {
    pub fn get(&self, axis: TraitAxis) -> i32 {
        match axis {
            TraitAxis::Mind => self.mind,
            TraitAxis::Energy => self.energy,
            TraitAxis::Nature => self.nature,
            TraitAxis::Tactics => self.tactics,
        }
    }

    /// Fold one selection into the axis total: `selection * weight`.
    pub fn apply(&mut self, axis: TraitAxis, selection: i8, weight: i8) {
        let delta = i32::from(selection) * i32::from(weight);
        match axis {
            TraitAxis::Mind => self.mind += delta,
            TraitAxis::Energy => self.energy += delta,
            TraitAxis::Nature => self.nature += delta,
            TraitAxis::Tactics => self.tactics += delta,
        }
    }

    /// Resolve the 4-letter code by axis sign. An axis total of exactly
    /// zero resolves to the positive pole, so E, N, T and J win ties.
    pub fn type_code(&self) -> String {
        TraitAxis::ordered()
            .into_iter()
            .map(|axis| {
                if self.get(axis) >= 0 {
                    axis.positive_pole()
                } else {
                    axis.negative_pole()
                }
            })
            .collect()
    }
}
