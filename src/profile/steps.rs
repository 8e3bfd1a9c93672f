/// One step of the onboarding wizard, as shown by `gc-score steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub section: &'static str,
}

/// The wizard steps in presentation order. The scorer only reads a
/// subset of the answers these collect; the rest are kept for profile
/// completeness.
pub const FORM_STEPS: &[FormStep] = &[
    FormStep {
        id: "resume-review",
        title: "Resume Review",
        description: "Verify extracted information",
        section: "Foundation",
    },
    FormStep {
        id: "personal-info",
        title: "Personal Details",
        description: "Complete your profile",
        section: "Foundation",
    },
    FormStep {
        id: "career-status",
        title: "Career Status",
        description: "Current professional status",
        section: "Foundation",
    },
    FormStep {
        id: "priorities-motivations",
        title: "Priorities",
        description: "What drives you",
        section: "Foundation",
    },
    FormStep {
        id: "career-vision",
        title: "Career Vision",
        description: "Your 10-year vision",
        section: "Vision",
    },
    FormStep {
        id: "career-milestones",
        title: "Milestones",
        description: "3-5 year goals",
        section: "Vision",
    },
    FormStep {
        id: "skill-assessment",
        title: "Skills",
        description: "Current capabilities",
        section: "Skills",
    },
    FormStep {
        id: "learning-preferences",
        title: "Learning Style",
        description: "How you learn best",
        section: "Skills",
    },
    FormStep {
        id: "constraints-risk",
        title: "Constraints",
        description: "Current challenges",
        section: "Reality",
    },
    FormStep {
        id: "motivation-purpose",
        title: "Motivation",
        description: "What success means",
        section: "Purpose",
    },
    FormStep {
        id: "commitment",
        title: "Commitment",
        description: "Your growth pledge",
        section: "Purpose",
    },
    FormStep {
        id: "work-identity",
        title: "Work Identity",
        description: "Professional brand",
        section: "Identity",
    },
    FormStep {
        id: "values-purpose",
        title: "Values",
        description: "What matters most",
        section: "Identity",
    },
    FormStep {
        id: "work-style",
        title: "Work Style",
        description: "How you work best",
        section: "Style",
    },
    FormStep {
        id: "wellbeing",
        title: "Wellbeing",
        description: "Energy & stress",
        section: "Style",
    },
    FormStep {
        id: "gamification",
        title: "Engagement",
        description: "What keeps you going",
        section: "Preferences",
    },
    FormStep {
        id: "income-lifestyle",
        title: "Lifestyle",
        description: "Income & balance",
        section: "Preferences",
    },
    FormStep {
        id: "community",
        title: "Community",
        description: "Social influence",
        section: "Preferences",
    },
    FormStep {
        id: "tech-readiness",
        title: "Tech Readiness",
        description: "Future orientation",
        section: "Future",
    },
    FormStep {
        id: "leadership",
        title: "Leadership",
        description: "Leadership potential",
        section: "Future",
    },
    FormStep {
        id: "final-preferences",
        title: "Preferences",
        description: "Communication & consent",
        section: "Final",
    },
    FormStep {
        id: "score-summary",
        title: "Your GC Score",
        description: "Complete breakdown",
        section: "Complete",
    },
];
