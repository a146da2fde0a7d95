pub mod assets;
pub mod health;

use axum::{
    http::Uri,
    response::{Redirect, Response},
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers as results;
use crate::questionnaire::handlers as questionnaire;
use crate::roadmap::handlers as roadmap;
use crate::session::{with_cookie, CurrentSession};
use crate::state::AppState;

/// GET /
/// Sends the browser to whichever page its session is on.
async fn current_page(CurrentSession(session): CurrentSession) -> Response {
    with_cookie(session.id, Redirect::to(session.page.path()))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(current_page))
        .route("/health", get(health::health_handler))
        .route("/static/style.css", get(assets::stylesheet_handler))
        .route(
            "/questionnaire",
            get(questionnaire::handle_questionnaire).post(questionnaire::handle_submit),
        )
        .route("/results", get(results::handle_results))
        .route("/results/select", post(results::handle_select))
        .route("/roadmap", get(roadmap::handle_roadmap))
        .route("/roadmap/back", post(roadmap::handle_back))
        .fallback(not_found)
        .with_state(state)
}
