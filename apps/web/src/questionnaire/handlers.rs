//! Axum route handlers for the questionnaire page.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect, Response},
    Form,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::questionnaire::options::{self, keys};
use crate::questionnaire::validation::{validate_submission, QuestionnaireForm};
use crate::render::{self, Chrome, OptionView, QuestionView, QuestionnairePage, SectionView};
use crate::session::{with_cookie, CurrentSession, Page};
use crate::state::AppState;

/// GET /questionnaire
///
/// Renders the form, pre-filled from the session's last profile.
pub async fn handle_questionnaire(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AppError> {
    let profile = state
        .sessions
        .update(session.id, |s| {
            s.navigate(Page::Questionnaire);
            s.profile.clone()
        })
        .await;

    let form = profile
        .as_ref()
        .map(QuestionnaireForm::from)
        .unwrap_or_default();

    let html = render::render(&questionnaire_page(&state, &form, Vec::new()))?;
    Ok(with_cookie(session.id, Html(html)))
}

/// POST /questionnaire
///
/// Valid submissions replace the session profile and move on to the results.
/// Invalid ones re-render the form with inline errors and change nothing.
pub async fn handle_submit(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = QuestionnaireForm::from_pairs(pairs);

    match validate_submission(&form) {
        Ok(profile) => {
            info!(
                session_id = %session.id,
                interests = profile.interests.len(),
                strengths = profile.strengths.len(),
                "Profile submitted"
            );
            let next = state
                .sessions
                .update(session.id, |s| s.submit_profile(profile))
                .await;
            Ok(with_cookie(session.id, Redirect::to(next.path())))
        }
        Err(errors) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
            debug!(session_id = %session.id, ?fields, "Questionnaire rejected");
            let messages = errors.into_iter().map(|e| e.message).collect();
            let html = render::render(&questionnaire_page(&state, &form, messages))?;
            Ok(with_cookie(
                session.id,
                (StatusCode::UNPROCESSABLE_ENTITY, Html(html)),
            ))
        }
    }
}

fn questionnaire_page(
    state: &AppState,
    form: &QuestionnaireForm,
    errors: Vec<String>,
) -> QuestionnairePage {
    let sections = vec![
        SectionView {
            heading: "🎓 Academic Background",
            questions: vec![
                single(
                    keys::EDUCATION,
                    "Education Level",
                    "select",
                    options::EDUCATION_LEVELS,
                    form.education.as_deref(),
                ),
                single(
                    keys::FIELD,
                    "Field of Study",
                    "select",
                    options::FIELDS_OF_STUDY,
                    form.field.as_deref(),
                ),
            ],
        },
        SectionView {
            heading: "💡 Interests & Activities",
            questions: vec![multi(
                keys::INTERESTS,
                "Which activities do you genuinely enjoy? (Select up to 3)",
                options::INTERESTS,
                &form.interests,
            )],
        },
        SectionView {
            heading: "💪 Strengths",
            questions: vec![multi(
                keys::STRENGTHS,
                "What do you consider your strongest abilities? (Select up to 3)",
                options::STRENGTHS,
                &form.strengths,
            )],
        },
        SectionView {
            heading: "📚 Learning Preferences",
            questions: vec![
                single(
                    keys::LEARNING_STYLE,
                    "Preferred learning style",
                    "radio",
                    options::LEARNING_STYLES,
                    form.learning_style.as_deref(),
                ),
                single(
                    keys::LEARNING_RATE,
                    "How quickly do you usually pick up new skills?",
                    "radio",
                    options::LEARNING_RATES,
                    form.learning_rate.as_deref(),
                ),
            ],
        },
        SectionView {
            heading: "⏱️ Career Preferences",
            questions: vec![
                single(
                    keys::TIME_HORIZON,
                    "When do you want career stability?",
                    "radio",
                    options::TIME_HORIZONS,
                    form.time_horizon.as_deref(),
                ),
                single(
                    keys::RISK,
                    "Risk tolerance",
                    "radio",
                    options::RISK_TOLERANCES,
                    form.risk.as_deref(),
                ),
            ],
        },
    ];

    QuestionnairePage {
        chrome: Chrome::new(&state.config.title, Page::Questionnaire),
        errors,
        sections,
    }
}

/// Single-choice question; the first option is preselected when nothing
/// (or nothing valid) was submitted.
fn single(
    key: &'static str,
    label: &'static str,
    input: &'static str,
    choices: &'static [&'static str],
    current: Option<&str>,
) -> QuestionView {
    let current = current.and_then(|v| options::canonical(choices, v));
    let options = choices
        .iter()
        .enumerate()
        .map(|(i, &choice)| OptionView {
            label: choice,
            checked: match current {
                Some(c) => c == choice,
                None => i == 0,
            },
        })
        .collect();

    QuestionView {
        key,
        label,
        input,
        options,
    }
}

fn multi(
    key: &'static str,
    label: &'static str,
    choices: &'static [&'static str],
    current: &[String],
) -> QuestionView {
    let options = choices
        .iter()
        .map(|&choice| OptionView {
            label: choice,
            checked: current.iter().any(|c| c.trim() == choice),
        })
        .collect();

    QuestionView {
        key,
        label,
        input: "checkbox",
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_defaults_to_first_option() {
        let q = single(keys::RISK, "Risk", "radio", options::RISK_TOLERANCES, None);
        let checked: Vec<_> = q.options.iter().filter(|o| o.checked).collect();
        assert_eq!(checked.len(), 1);
        assert_eq!(checked[0].label, "Prefer stable paths");
    }

    #[test]
    fn test_single_keeps_valid_answer() {
        let q = single(
            keys::RISK,
            "Risk",
            "radio",
            options::RISK_TOLERANCES,
            Some("High risk tolerance"),
        );
        assert!(q.options[2].checked);
        assert!(!q.options[0].checked);
    }

    #[test]
    fn test_multi_marks_selected_options() {
        let q = multi(
            keys::STRENGTHS,
            "Strengths",
            options::STRENGTHS,
            &["Leadership".to_string()],
        );
        assert_eq!(q.input, "checkbox");
        assert_eq!(q.options.iter().filter(|o| o.checked).count(), 1);
        assert!(q.options[4].checked);
    }
}
