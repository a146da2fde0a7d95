//! The answer choices offered by the questionnaire form.

pub const MAX_MULTI_SELECT: usize = 3;

pub const EDUCATION_LEVELS: &[&str] = &["School (9–12)", "Undergraduate", "Postgraduate", "Other"];

pub const FIELDS_OF_STUDY: &[&str] = &[
    "Science",
    "Commerce",
    "Arts / Humanities",
    "Engineering",
    "Management",
    "Other",
];

pub const INTERESTS: &[&str] = &[
    "Problem solving / logical thinking",
    "Working with numbers or data",
    "Designing or creating visuals",
    "Writing or storytelling",
    "Teaching or explaining concepts",
    "Managing people or projects",
    "Building or fixing things",
    "Researching or deep learning",
    "Public speaking or persuasion",
];

pub const STRENGTHS: &[&str] = &[
    "Logical thinking",
    "Communication",
    "Creativity",
    "Discipline & consistency",
    "Leadership",
    "Learning new skills quickly",
];

pub const LEARNING_STYLES: &[&str] = &["Mostly theory-based", "Mostly practical", "Balanced"];

pub const LEARNING_RATES: &[&str] = &["Slow but steady", "Average", "Fast learner"];

pub const TIME_HORIZONS: &[&str] = &["0–1 year", "1–3 years", "3+ years"];

pub const RISK_TOLERANCES: &[&str] = &[
    "Prefer stable paths",
    "Moderate risk",
    "High risk tolerance",
];

/// Form field names. Also used as classifier feature prefixes.
pub mod keys {
    pub const EDUCATION: &str = "education";
    pub const FIELD: &str = "field";
    pub const INTERESTS: &str = "interests";
    pub const STRENGTHS: &str = "strengths";
    pub const LEARNING_STYLE: &str = "learning_style";
    pub const LEARNING_RATE: &str = "learning_rate";
    pub const TIME_HORIZON: &str = "time_horizon";
    pub const RISK: &str = "risk";
}

/// Finds the canonical option matching `value`, ignoring surrounding whitespace.
pub fn canonical(options: &'static [&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    options.iter().copied().find(|o| *o == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::bundled_catalog;

    #[test]
    fn test_canonical_trims_input() {
        assert_eq!(
            canonical(STRENGTHS, "  Creativity "),
            Some("Creativity")
        );
        assert_eq!(canonical(STRENGTHS, "creativity"), None);
    }

    #[test]
    fn test_every_catalog_activity_is_an_offered_interest() {
        let catalog = bundled_catalog();
        for career in catalog.careers() {
            assert!(!career.core_activities.is_empty(), "{}", career.career_name);
            for activity in &career.core_activities {
                assert!(
                    canonical(INTERESTS, activity).is_some(),
                    "{}: '{activity}' is not a questionnaire interest",
                    career.career_name
                );
            }
        }
    }
}
