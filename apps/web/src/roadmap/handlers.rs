//! Axum route handlers for the roadmap page.

use axum::{
    extract::State,
    response::{Html, Redirect, Response},
};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::render::{self, Chrome, NoticePage, PhaseView, RoadmapPage};
use crate::roadmap::resolve_roadmap;
use crate::session::{with_cookie, CurrentSession, Navigation, Page};
use crate::state::AppState;

/// GET /roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Response, AppError> {
    let id = session.id;
    let (navigation, selected) = state
        .sessions
        .update(id, |s| (s.navigate(Page::Roadmap), s.selected_career.clone()))
        .await;

    let career_name = match (navigation, selected) {
        (Navigation::Arrived(_), Some(name)) => name,
        (Navigation::Refused { warning, .. }, _) => {
            let page = NoticePage {
                chrome: Chrome::new(&state.config.title, Page::Roadmap),
                heading: "Career Roadmap",
                message: warning,
                link_href: Page::Results.path(),
                link_label: "← Back to Results",
            };
            return Ok(with_cookie(id, Html(render::render(&page)?)));
        }
        (navigation, _) => {
            return Ok(with_cookie(id, Redirect::to(navigation.page().path())));
        }
    };

    let career = state
        .catalog
        .find(&career_name)
        .ok_or_else(|| AppError::NotFound(format!("Career '{career_name}' not found")))?;

    let resolved = resolve_roadmap(career);
    match &resolved {
        Some(r) => debug!(career = %career.career_name, roadmap = r.key, "Resolved roadmap"),
        None => warn!(career = %career.career_name, domain = %career.domain, "No roadmap for career"),
    }

    let page = RoadmapPage {
        chrome: Chrome::new(&state.config.title, Page::Roadmap),
        display_name: career.display_name().to_string(),
        subtitle: resolved
            .map(|r| r.subtitle())
            .unwrap_or("Domain-Based Career Roadmap"),
        domain: career.domain.clone(),
        phases: resolved
            .map(|r| {
                r.phases
                    .iter()
                    .map(|p| PhaseView {
                        name: p.name,
                        milestones: p.milestones,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        entry_roles: career.entry_roles.clone(),
        adjacent_careers: career.adjacent_careers.clone(),
    };
    Ok(with_cookie(id, Html(render::render(&page)?)))
}

/// POST /roadmap/back
pub async fn handle_back(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let next = state.sessions.update(session.id, |s| s.back_to_results()).await;
    with_cookie(session.id, Redirect::to(next.path()))
}
