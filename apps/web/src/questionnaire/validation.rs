use serde::Serialize;

use super::options::{self, keys, MAX_MULTI_SELECT};
use super::profile::UserProfile;

/// Raw questionnaire submission. Multi-selects arrive as repeated keys, so the
/// form is decoded as ordered `(key, value)` pairs first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireForm {
    pub education: Option<String>,
    pub field: Option<String>,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub learning_style: Option<String>,
    pub learning_rate: Option<String>,
    pub time_horizon: Option<String>,
    pub risk: Option<String>,
}

impl QuestionnaireForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = QuestionnaireForm::default();
        for (key, value) in pairs {
            match key.as_str() {
                keys::EDUCATION => form.education = Some(value),
                keys::FIELD => form.field = Some(value),
                keys::INTERESTS => form.interests.push(value),
                keys::STRENGTHS => form.strengths.push(value),
                keys::LEARNING_STYLE => form.learning_style = Some(value),
                keys::LEARNING_RATE => form.learning_rate = Some(value),
                keys::TIME_HORIZON => form.time_horizon = Some(value),
                keys::RISK => form.risk = Some(value),
                _ => {}
            }
        }
        form
    }
}

impl From<&UserProfile> for QuestionnaireForm {
    fn from(profile: &UserProfile) -> Self {
        QuestionnaireForm {
            education: Some(profile.education.clone()),
            field: Some(profile.field.clone()),
            interests: profile.interests.clone(),
            strengths: profile.strengths.clone(),
            learning_style: Some(profile.learning_style.clone()),
            learning_rate: Some(profile.learning_rate.clone()),
            time_horizon: Some(profile.time_horizon.clone()),
            risk: Some(profile.risk.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validates a submission into a [`UserProfile`], collecting every failure.
///
/// Rules:
/// - interests and strengths: 1..=3 distinct known options
/// - every single-choice answer must be one of the offered options
pub fn validate_submission(form: &QuestionnaireForm) -> Result<UserProfile, Vec<FieldError>> {
    let mut errors = Vec::new();

    let education = single_choice(
        keys::EDUCATION,
        "education level",
        options::EDUCATION_LEVELS,
        form.education.as_deref(),
        &mut errors,
    );
    let field = single_choice(
        keys::FIELD,
        "field of study",
        options::FIELDS_OF_STUDY,
        form.field.as_deref(),
        &mut errors,
    );
    let interests = multi_choice(
        keys::INTERESTS,
        "interest",
        options::INTERESTS,
        &form.interests,
        &mut errors,
    );
    let strengths = multi_choice(
        keys::STRENGTHS,
        "strength",
        options::STRENGTHS,
        &form.strengths,
        &mut errors,
    );
    let learning_style = single_choice(
        keys::LEARNING_STYLE,
        "learning style",
        options::LEARNING_STYLES,
        form.learning_style.as_deref(),
        &mut errors,
    );
    let learning_rate = single_choice(
        keys::LEARNING_RATE,
        "learning pace",
        options::LEARNING_RATES,
        form.learning_rate.as_deref(),
        &mut errors,
    );
    let time_horizon = single_choice(
        keys::TIME_HORIZON,
        "time horizon",
        options::TIME_HORIZONS,
        form.time_horizon.as_deref(),
        &mut errors,
    );
    let risk = single_choice(
        keys::RISK,
        "risk tolerance",
        options::RISK_TOLERANCES,
        form.risk.as_deref(),
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UserProfile {
        education: education.unwrap_or_default(),
        field: field.unwrap_or_default(),
        interests,
        strengths,
        learning_style: learning_style.unwrap_or_default(),
        learning_rate: learning_rate.unwrap_or_default(),
        time_horizon: time_horizon.unwrap_or_default(),
        risk: risk.unwrap_or_default(),
    })
}

fn single_choice(
    key: &'static str,
    label: &str,
    allowed: &'static [&'static str],
    value: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        errors.push(FieldError {
            field: key,
            message: format!("Choose a {label}."),
        });
        return None;
    };

    match options::canonical(allowed, value) {
        Some(option) => Some(option.to_string()),
        None => {
            errors.push(FieldError {
                field: key,
                message: format!("'{}' is not a valid {label}.", value.trim()),
            });
            None
        }
    }
}

fn multi_choice(
    key: &'static str,
    label: &str,
    allowed: &'static [&'static str],
    values: &[String],
    errors: &mut Vec<FieldError>,
) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();

    for value in values {
        match options::canonical(allowed, value) {
            Some(option) => {
                if !selected.iter().any(|s| s == option) {
                    selected.push(option.to_string());
                }
            }
            None => errors.push(FieldError {
                field: key,
                message: format!("'{}' is not a valid {label}.", value.trim()),
            }),
        }
    }

    if selected.is_empty() {
        errors.push(FieldError {
            field: key,
            message: format!("Select at least one {label}."),
        });
    } else if selected.len() > MAX_MULTI_SELECT {
        errors.push(FieldError {
            field: key,
            message: format!(
                "Select at most {MAX_MULTI_SELECT} {label} options ({} selected).",
                selected.len()
            ),
        });
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> QuestionnaireForm {
        QuestionnaireForm {
            education: Some("Postgraduate".to_string()),
            field: Some("Science".to_string()),
            interests: vec!["Researching or deep learning".to_string()],
            strengths: vec!["Communication".to_string(), "Leadership".to_string()],
            learning_style: Some("Mostly practical".to_string()),
            learning_rate: Some("Average".to_string()),
            time_horizon: Some("3+ years".to_string()),
            risk: Some("Prefer stable paths".to_string()),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_valid_submission_builds_profile() {
        let profile = validate_submission(&valid_form()).unwrap();
        assert_eq!(profile.education, "Postgraduate");
        assert_eq!(profile.interests, vec!["Researching or deep learning"]);
        assert_eq!(profile.strengths.len(), 2);
    }

    #[test]
    fn test_zero_interests_rejected() {
        let mut form = valid_form();
        form.interests.clear();
        let errors = validate_submission(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["interests"]);
        assert!(errors[0].message.contains("at least one"));
    }

    #[test]
    fn test_zero_strengths_rejected() {
        let mut form = valid_form();
        form.strengths.clear();
        let errors = validate_submission(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["strengths"]);
    }

    #[test]
    fn test_more_than_three_interests_rejected() {
        let mut form = valid_form();
        form.interests = options::INTERESTS[..4].iter().map(|s| s.to_string()).collect();
        let errors = validate_submission(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["interests"]);
        assert!(errors[0].message.contains("at most 3"));
    }

    #[test]
    fn test_more_than_three_strengths_rejected() {
        let mut form = valid_form();
        form.strengths = options::STRENGTHS.iter().map(|s| s.to_string()).collect();
        let errors = validate_submission(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["strengths"]);
    }

    #[test]
    fn test_duplicates_collapse_before_limit() {
        let mut form = valid_form();
        form.interests = vec![
            "Writing or storytelling".to_string(),
            "Writing or storytelling".to_string(),
            "Teaching or explaining concepts".to_string(),
            "Writing or storytelling".to_string(),
        ];
        let profile = validate_submission(&form).unwrap();
        assert_eq!(
            profile.interests,
            vec!["Writing or storytelling", "Teaching or explaining concepts"]
        );
    }

    #[test]
    fn test_unknown_options_rejected() {
        let mut form = valid_form();
        form.risk = Some("YOLO".to_string());
        form.strengths.push("Telepathy".to_string());
        let errors = validate_submission(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["strengths", "risk"]);
        assert!(errors[1].message.contains("YOLO"));
    }

    #[test]
    fn test_missing_single_choice_rejected() {
        let mut form = valid_form();
        form.education = None;
        form.field = Some("   ".to_string());
        let errors = validate_submission(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["education", "field"]);
    }

    #[test]
    fn test_from_pairs_collects_repeated_keys() {
        let pairs = vec![
            ("education".to_string(), "Other".to_string()),
            ("interests".to_string(), "Building or fixing things".to_string()),
            ("interests".to_string(), "Writing or storytelling".to_string()),
            ("strengths".to_string(), "Creativity".to_string()),
            ("csrf".to_string(), "ignored".to_string()),
        ];
        let form = QuestionnaireForm::from_pairs(pairs);
        assert_eq!(form.education.as_deref(), Some("Other"));
        assert_eq!(form.interests.len(), 2);
        assert_eq!(form.strengths, vec!["Creativity"]);
        assert!(form.risk.is_none());
    }

    #[test]
    fn test_profile_round_trips_into_form() {
        let profile = validate_submission(&valid_form()).unwrap();
        assert_eq!(QuestionnaireForm::from(&profile), valid_form());
    }
}
