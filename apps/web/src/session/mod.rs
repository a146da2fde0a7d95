//! Per-browser session state: a cookie-keyed entry in [`SessionStore`]
//! holding the current [`Page`], the submitted profile and the selected career.

pub mod page;
pub mod store;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{
        header::{COOKIE, SET_COOKIE},
        request::Parts,
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::state::AppState;

pub use page::{Navigation, Page, Session};
pub use store::SessionStore;

pub const SESSION_COOKIE: &str = "pathwise_session";

/// Extractor yielding the caller's session, creating one when needed.
/// A read-only snapshot; handlers change state through [`SessionStore::update`].
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = session_id_from_headers(&parts.headers);
        Ok(CurrentSession(state.sessions.load(id).await))
    }
}

/// Reads the session id from the `Cookie` header(s).
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

/// Attaches the session cookie to any response.
pub fn with_cookie(id: Uuid, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Ok(value) = HeaderValue::from_str(&session_cookie(id)) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_parsed_among_other_cookies() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}; lang=en")).unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_garbage_session_id_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("pathwise_session=not-a-uuid"),
        );
        assert_eq!(session_id_from_headers(&headers), None);
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_cookie_attributes() {
        let id = Uuid::new_v4();
        let cookie = session_cookie(id);
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}={id}")));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_with_cookie_sets_header() {
        let id = Uuid::new_v4();
        let response = with_cookie(id, "ok");
        let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(header.contains(&id.to_string()));
    }
}
