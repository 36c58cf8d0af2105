use super::domain::{AnswerOption, InstrumentCategory, InstrumentId};

/// A standardized questionnaire definition: fixed questions, one shared
/// answer scale, and a step-function interpretation over the total score.
#[derive(Debug, Clone)]
pub struct Instrument {
    pub id: InstrumentId,
    pub name: &'static str,
    pub category: InstrumentCategory,
    pub description: &'static str,
    pub questions: Vec<&'static str>,
    pub options: Vec<AnswerOption>,
    interpret: fn(u32) -> &'static str,
}

impl Instrument {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Highest total a full traversal can reach.
    pub fn max_score(&self) -> u32 {
        let per_question = self
            .options
            .iter()
            .map(|option| option.value)
            .max()
            .unwrap_or(0);
        self.questions.len() as u32 * per_question
    }

    /// Map a total score to its interpretation bucket. Pure; thresholds are
    /// inclusive lower bounds evaluated highest-first.
    pub fn interpret(&self, score: u32) -> &'static str {
        (self.interpret)(score)
    }

    pub fn accepts_value(&self, value: u32) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// The fixed six-instrument catalog.
#[derive(Debug)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
}

impl InstrumentCatalog {
    pub fn standard() -> Self {
        Self {
            instruments: standard_instruments(),
        }
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn get(&self, id: InstrumentId) -> Option<&Instrument> {
        self.instruments.iter().find(|instrument| instrument.id == id)
    }

    /// Category/keyword filter backing the catalog browser. An empty query
    /// matches everything; matching is case-insensitive over name and
    /// description.
    pub fn search(
        &self,
        category: Option<InstrumentCategory>,
        query: &str,
    ) -> Vec<&Instrument> {
        let needle = query.trim().to_ascii_lowercase();
        self.instruments
            .iter()
            .filter(|instrument| category.map_or(true, |cat| instrument.category == cat))
            .filter(|instrument| {
                needle.is_empty()
                    || instrument.name.to_ascii_lowercase().contains(&needle)
                    || instrument.description.to_ascii_lowercase().contains(&needle)
            })
            .collect()
    }
}

const FREQUENCY_OPTIONS: [AnswerOption; 4] = [
    AnswerOption {
        label: "Not at all",
        value: 0,
    },
    AnswerOption {
        label: "Several days",
        value: 1,
    },
    AnswerOption {
        label: "More than half the days",
        value: 2,
    },
    AnswerOption {
        label: "Nearly every day",
        value: 3,
    },
];

const AGREEMENT_OPTIONS: [AnswerOption; 7] = [
    AnswerOption {
        label: "Strongly Disagree",
        value: 1,
    },
    AnswerOption {
        label: "Disagree",
        value: 2,
    },
    AnswerOption {
        label: "Slightly Disagree",
        value: 3,
    },
    AnswerOption {
        label: "Neutral",
        value: 4,
    },
    AnswerOption {
        label: "Slightly Agree",
        value: 5,
    },
    AnswerOption {
        label: "Agree",
        value: 6,
    },
    AnswerOption {
        label: "Strongly Agree",
        value: 7,
    },
];

fn interpret_wleis(score: u32) -> &'static str {
    if score >= 96 {
        "Exceptional Emotional Wisdom"
    } else if score >= 80 {
        "High Emotional Awareness"
    } else if score >= 60 {
        "Steadily Developing"
    } else {
        "Early Awareness Stage"
    }
}

fn interpret_phq9(score: u32) -> &'static str {
    if score >= 20 {
        "High Need for Nurturing"
    } else if score >= 15 {
        "Significant Support Focus"
    } else if score >= 10 {
        "Self-Care Priority"
    } else if score >= 5 {
        "Light Support Focus"
    } else {
        "Radiant Well-being"
    }
}

fn interpret_gad7(score: u32) -> &'static str {
    if score >= 15 {
        "Deep Awareness (Seeking Calm)"
    } else if score >= 10 {
        "Moderate Alertness"
    } else if score >= 5 {
        "Light Awareness"
    } else {
        "Deeply Grounded"
    }
}

// PSS-10 is summed raw: the four positively keyed items (4, 5, 7, 8) are
// NOT reverse-scored before totalling. These thresholds correspond to the
// raw summation; reverse-scoring would require re-deriving both cut points.
fn interpret_pss10(score: u32) -> &'static str {
    if score >= 27 {
        "High Resilience Training Opportunity"
    } else if score >= 14 {
        "Steady Adaptation"
    } else {
        "Excellent Resilience"
    }
}

fn interpret_isi(score: u32) -> &'static str {
    if score >= 22 {
        "Priority Rest Recovery"
    } else if score >= 15 {
        "Moderate Recovery Needs"
    } else if score >= 8 {
        "Healthy Maintenance"
    } else {
        "Optimal Rest"
    }
}

fn interpret_asrs(score: u32) -> &'static str {
    if score >= 4 {
        "Vibrant & Dynamic Mind"
    } else {
        "Structured Focus"
    }
}

fn standard_instruments() -> Vec<Instrument> {
    vec![
        Instrument {
            id: InstrumentId::Wleis,
            name: "Emotional Intelligence (WLEIS)",
            category: InstrumentCategory::Intelligence,
            description:
                "Discover how beautifully you navigate emotions in yourself and those around you.",
            questions: vec![
                "I have a good sense of why I have certain feelings most of the time.",
                "I have a good understanding of my own emotions.",
                "I really understand what I feel.",
                "I always know whether I am happy or not.",
                "I always know my friends' emotions from their behavior.",
                "I am a good observer of others' emotions.",
                "I am sensitive to the feelings and emotions of others.",
                "I have a good understanding of the emotions of people around me.",
                "I always set goals for myself and then try my best to achieve them.",
                "I always tell myself I am a competent person.",
                "I am a self-motivated person.",
                "I would always encourage myself to try my best.",
                "I am able to control my temper and handle difficulties rationally.",
                "I am quite capable of controlling my own emotions.",
                "I can always calm down quickly when I am very angry.",
                "I have good control of my own emotions.",
            ],
            options: AGREEMENT_OPTIONS.to_vec(),
            interpret: interpret_wleis,
        },
        Instrument {
            id: InstrumentId::Phq9,
            name: "Self-Compassion Check (PHQ-9)",
            category: InstrumentCategory::Mood,
            description:
                "A gentle check on your current emotional load to see how we can best support you.",
            questions: vec![
                "Little interest or pleasure in doing things?",
                "Feeling down, depressed, or hopeless?",
                "Trouble falling or staying asleep, or sleeping too much?",
                "Feeling tired or having little energy?",
                "Poor appetite or overeating?",
                "Feeling bad about yourself — or that you are a failure?",
                "Trouble concentrating on things, such as reading or watching TV?",
                "Moving or speaking so slowly that other people could have noticed?",
                "Thoughts that you would be better off dead, or of hurting yourself?",
            ],
            options: FREQUENCY_OPTIONS.to_vec(),
            interpret: interpret_phq9,
        },
        Instrument {
            id: InstrumentId::Gad7,
            name: "Peace & Focus (GAD-7)",
            category: InstrumentCategory::Mood,
            description: "Measuring your inner calm to find tools that help you stay grounded.",
            questions: vec![
                "Feeling nervous, anxious, or on edge?",
                "Not being able to stop or control worrying?",
                "Worrying too much about different things?",
                "Trouble relaxing?",
                "Being so restless that it's hard to sit still?",
                "Becoming easily annoyed or irritable?",
                "Feeling afraid, as if something awful might happen?",
            ],
            options: FREQUENCY_OPTIONS.to_vec(),
            interpret: interpret_gad7,
        },
        Instrument {
            id: InstrumentId::Pss10,
            name: "Resilience Index (PSS-10)",
            category: InstrumentCategory::Stress,
            description: "A look at how you handle life's dynamic waves.",
            questions: vec![
                "How often have you been upset because of something that happened unexpectedly?",
                "How often have you felt that you were unable to control the important things in your life?",
                "How often have you felt nervous and 'stressed'?",
                "How often have you felt confident about your ability to handle your personal problems?",
                "How often have you felt that things were going your way?",
                "How often have you found that you could not cope with all the things that you had to do?",
                "How often have you been able to control irritations in your life?",
                "How often have you felt that you were on top of things?",
                "How often have you been angered because of things that were outside of your control?",
                "How often have you felt difficulties were piling up so high that you could not overcome them?",
            ],
            options: vec![
                AnswerOption {
                    label: "Never",
                    value: 0,
                },
                AnswerOption {
                    label: "Almost Never",
                    value: 1,
                },
                AnswerOption {
                    label: "Sometimes",
                    value: 2,
                },
                AnswerOption {
                    label: "Fairly Often",
                    value: 3,
                },
                AnswerOption {
                    label: "Very Often",
                    value: 4,
                },
            ],
            interpret: interpret_pss10,
        },
        Instrument {
            id: InstrumentId::Isi,
            name: "Rest Recovery (ISI)",
            category: InstrumentCategory::Behavior,
            description: "Checking in on your biological battery and sleep quality.",
            questions: vec![
                "Difficulty falling asleep",
                "Difficulty staying asleep",
                "Problem of waking up too early",
                "How satisfied are you with your current sleep pattern?",
                "How noticeable to others is your sleep problem?",
                "How worried/distressed are you about your current sleep problem?",
                "To what extent do you consider your sleep problem to interfere with your daily functioning?",
            ],
            options: vec![
                AnswerOption {
                    label: "None / Very Satisfied",
                    value: 0,
                },
                AnswerOption {
                    label: "Mild / Satisfied",
                    value: 1,
                },
                AnswerOption {
                    label: "Moderate / Neutral",
                    value: 2,
                },
                AnswerOption {
                    label: "Severe / Dissatisfied",
                    value: 3,
                },
                AnswerOption {
                    label: "Very Severe / Very Dissatisfied",
                    value: 4,
                },
            ],
            interpret: interpret_isi,
        },
        Instrument {
            id: InstrumentId::Asrs,
            name: "Focus Archetype (ASRS)",
            category: InstrumentCategory::Adhd,
            description: "Understanding how your mind processes and directs its energy.",
            questions: vec![
                "How often do you have trouble wrapping up the final details of a project?",
                "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
                "How often do you have problems remembering appointments or obligations?",
                "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
                "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
                "How often do you feel overly active and compelled to do things, as if you were driven by a motor?",
            ],
            options: vec![
                AnswerOption {
                    label: "Never",
                    value: 0,
                },
                AnswerOption {
                    label: "Rarely",
                    value: 1,
                },
                AnswerOption {
                    label: "Sometimes",
                    value: 2,
                },
                AnswerOption {
                    label: "Often",
                    value: 3,
                },
                AnswerOption {
                    label: "Very Often",
                    value: 4,
                },
            ],
            interpret: interpret_asrs,
        },
    ]
}
