/// Descriptive metadata for one resolved 4-letter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Look up the fixed 16-entry type table. Every sign combination of the
/// four axes maps to an entry, so a code produced by `AxisScores::type_code`
/// always resolves.
pub fn type_profile(code: &str) -> Option<&'static TypeProfile> {
    TYPE_PROFILES.iter().find(|profile| profile.code == code)
}

static TYPE_PROFILES: [TypeProfile; 16] = [
    TypeProfile {
        code: "INTJ",
        name: "The Architect",
        description: "Imaginative and strategic thinkers, with a plan for everything.",
    },
    TypeProfile {
        code: "INTP",
        name: "The Logician",
        description: "Innovative inventors with an unquenchable thirst for knowledge.",
    },
    TypeProfile {
        code: "ENTJ",
        name: "The Commander",
        description: "Bold, imaginative and strong-willed leaders, always finding a way – or making one.",
    },
    TypeProfile {
        code: "ENTP",
        name: "The Debater",
        description: "Smart and curious thinkers who cannot resist a intellectual challenge.",
    },
    TypeProfile {
        code: "INFJ",
        name: "The Advocate",
        description: "Quiet and mystical, yet very inspiring and tireless idealists.",
    },
    TypeProfile {
        code: "INFP",
        name: "The Mediator",
        description: "Poetic, kind and altruistic people, always eager to help a good cause.",
    },
    TypeProfile {
        code: "ENFJ",
        name: "The Protagonist",
        description: "Charismatic and inspiring leaders, able to mesmerize their listeners.",
    },
    TypeProfile {
        code: "ENFP",
        name: "The Campaigner",
        description: "Enthusiastic, creative and sociable free spirits, who can always find a reason to smile.",
    },
    TypeProfile {
        code: "ISTJ",
        name: "The Logistician",
        description: "Practical and fact-minded individuals, whose reliability cannot be doubted.",
    },
    TypeProfile {
        code: "ISFJ",
        name: "The Defender",
        description: "Very dedicated and warm protectors, always ready to defend their loved ones.",
    },
    TypeProfile {
        code: "ESTJ",
        name: "The Executive",
        description: "Excellent administrators, unsurpassed at managing things – or people.",
    },
    TypeProfile {
        code: "ESFJ",
        name: "The Consul",
        description: "Extraordinarily caring, social and popular people, always eager to help.",
    },
    TypeProfile {
        code: "ISTP",
        name: "The Virtuoso",
        description: "Bold and practical experimenters, masters of all kinds of tools.",
    },
    TypeProfile {
        code: "ISFP",
        name: "The Adventurer",
        description: "Flexible and charming artists, always ready to explore and experience something new.",
    },
    TypeProfile {
        code: "ESTP",
        name: "The Entrepreneur",
        description: "Smart, energetic and very perceptive people, who truly enjoy living on the edge.",
    },
    TypeProfile {
        code: "ESFP",
        name: "The Entertainer",
        description: "Spontaneous, energetic and enthusiastic people – life is never boring around them.",
    },
];
