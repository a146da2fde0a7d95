//! Axum route handlers for the results page.

use axum::{
    extract::State,
    response::{Html, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::matching::matcher::{CareerMatcher, MatchReport, MatchResult, MODEL_FALLBACK_NOTICE};
use crate::matching::overlap::OverlapMatcher;
use crate::questionnaire::profile::UserProfile;
use crate::render::{self, CareerCard, Chrome, ResultsPage};
use crate::session::{with_cookie, CurrentSession, Navigation, Page};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectCareerRequest {
    pub career: String,
}

/// GET /results
///
/// Ranks the catalog against the session profile. Without a profile the
/// session is sent back to the questionnaire.
pub async fn handle_results(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AppError> {
    let id = session.id;
    let (navigation, profile) = state
        .sessions
        .update(id, |s| (s.navigate(Page::Results), s.profile.clone()))
        .await;

    let profile = match (navigation, profile) {
        (Navigation::Arrived(Page::Results), Some(profile)) => profile,
        (navigation, _) => {
            return Ok(with_cookie(id, Redirect::to(navigation.page().path())));
        }
    };

    let report = rank_with_fallback(&state, &profile).await?;
    info!(
        session_id = %id,
        backend = %report.backend,
        matches = report.matches.len(),
        top_raw_score = report.matches.first().map(|m| m.raw_score),
        "Ranked careers"
    );

    let page = ResultsPage {
        chrome: Chrome::new(&state.config.title, Page::Results),
        notice: report.notice.clone(),
        backend_label: report.backend.clone(),
        cards: report.matches.iter().map(card).collect(),
    };
    Ok(with_cookie(id, Html(render::render(&page)?)))
}

/// POST /results/select
///
/// Stores the chosen career and moves the session to its roadmap. Sessions
/// that have not submitted the questionnaire are sent there instead.
pub async fn handle_select(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Form(request): Form<SelectCareerRequest>,
) -> Result<Response, AppError> {
    if request.career.trim().is_empty() {
        return Err(AppError::Validation("career cannot be empty".to_string()));
    }

    let career = state
        .catalog
        .find(&request.career)
        .ok_or_else(|| AppError::NotFound(format!("Career '{}' not found", request.career)))?;

    let career_name = career.career_name.clone();
    let navigation = state
        .sessions
        .update(session.id, |s| s.select_career(career_name))
        .await;
    if matches!(navigation, Navigation::Redirected(_)) {
        debug!(session_id = %session.id, "Career selected before the questionnaire");
    }
    Ok(with_cookie(session.id, Redirect::to(navigation.page().path())))
}

/// Runs the configured matcher; if the model is unavailable, degrades to the
/// overlap scorer and says so on the page.
async fn rank_with_fallback(
    state: &AppState,
    profile: &UserProfile,
) -> Result<MatchReport, AppError> {
    match state.matcher.rank(profile, &state.catalog).await {
        Ok(report) => Ok(report),
        Err(AppError::ModelUnavailable(reason)) => {
            warn!("Falling back to overlap matching: {reason}");
            let mut report = OverlapMatcher.rank(profile, &state.catalog).await?;
            report.notice = Some(MODEL_FALLBACK_NOTICE.to_string());
            Ok(report)
        }
        Err(e) => Err(e),
    }
}

fn card(result: &MatchResult) -> CareerCard {
    CareerCard {
        career_name: result.career.career_name.clone(),
        display_name: result.career.display_name().to_string(),
        domain: result.career.domain.clone(),
        score_label: format!("{}%", result.score),
        detail: Some(result.detail.clone()),
    }
}
