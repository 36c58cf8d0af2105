use super::domain::{TraitAxis, TraitStatement};

/// The fixed 24-statement battery: four six-statement blocks, one per
/// axis, each mixing positively and negatively keyed statements. Replacing
/// the battery requires keeping this balanced 4x6 structure so axis totals
/// stay comparable in range.
#[derive(Debug)]
pub struct PersonalityBattery {
    statements: Vec<TraitStatement>,
}

impl PersonalityBattery {
    pub fn standard() -> Self {
        Self {
            statements: standard_statements(),
        }
    }

    pub fn statements(&self) -> &[TraitStatement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

fn standard_statements() -> Vec<TraitStatement> {
    use TraitAxis::{Energy, Mind, Nature, Tactics};

    vec![
        TraitStatement {
            prompt: "You regularly make new friends.",
            axis: Mind,
            weight: 1,
        },
        TraitStatement {
            prompt: "You feel exhausted after spending time with a large group of people.",
            axis: Mind,
            weight: -1,
        },
        TraitStatement {
            prompt: "You enjoy being the center of attention.",
            axis: Mind,
            weight: 1,
        },
        TraitStatement {
            prompt: "You prefer to perform your best work alone rather than in a team.",
            axis: Mind,
            weight: -1,
        },
        TraitStatement {
            prompt: "You are usually the one to start conversations.",
            axis: Mind,
            weight: 1,
        },
        TraitStatement {
            prompt: "You spend a lot of your free time exploring various random topics that pique your interest.",
            axis: Mind,
            weight: -1,
        },
        TraitStatement {
            prompt: "You often spend time exploring unrealistic yet intriguing ideas.",
            axis: Energy,
            weight: 1,
        },
        TraitStatement {
            prompt: "You prefer to focus on the concrete details of the present moment.",
            axis: Energy,
            weight: -1,
        },
        TraitStatement {
            prompt: "Your dreams tend to focus on the real world and its events.",
            axis: Energy,
            weight: -1,
        },
        TraitStatement {
            prompt: "You are more of a big-picture person than a detail-oriented one.",
            axis: Energy,
            weight: 1,
        },
        TraitStatement {
            prompt: "You often find yourself lost in thought when you are walking in nature.",
            axis: Energy,
            weight: 1,
        },
        TraitStatement {
            prompt: "You find it easy to stay grounded and focused on the facts.",
            axis: Energy,
            weight: -1,
        },
        TraitStatement {
            prompt: "Your emotions control you more than you control them.",
            axis: Nature,
            weight: -1,
        },
        TraitStatement {
            prompt: "In a disagreement, you prioritize truth over people's feelings.",
            axis: Nature,
            weight: 1,
        },
        TraitStatement {
            prompt: "You are more inclined to follow your head than your heart.",
            axis: Nature,
            weight: 1,
        },
        TraitStatement {
            prompt: "You find it easy to empathize with a person whose experiences are very different from yours.",
            axis: Nature,
            weight: -1,
        },
        TraitStatement {
            prompt: "You would rather be liked than be powerful.",
            axis: Nature,
            weight: -1,
        },
        TraitStatement {
            prompt: "You prioritize efficiency and logic in your professional life.",
            axis: Nature,
            weight: 1,
        },
        TraitStatement {
            prompt: "Your work style is closer to random energy spikes than a methodical routine.",
            axis: Tactics,
            weight: -1,
        },
        TraitStatement {
            prompt: "You prefer to have a to-do list for each day.",
            axis: Tactics,
            weight: 1,
        },
        TraitStatement {
            prompt: "You often make decisions on a whim.",
            axis: Tactics,
            weight: -1,
        },
        TraitStatement {
            prompt: "You like to have a clear plan before starting any new project.",
            axis: Tactics,
            weight: 1,
        },
        TraitStatement {
            prompt: "Your workspace is usually very organized.",
            axis: Tactics,
            weight: 1,
        },
        TraitStatement {
            prompt: "You keep your options open rather than committing to a final plan early on.",
            axis: Tactics,
            weight: -1,
        },
    ]
}
