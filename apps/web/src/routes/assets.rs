use axum::{http::header::CONTENT_TYPE, response::IntoResponse};

const STYLESHEET: &str = include_str!("../../static/style.css");

/// GET /static/style.css
pub async fn stylesheet_handler() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
