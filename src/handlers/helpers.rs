use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::models::{AppState, Toast};
use crate::sessions::{Session, SESSION_COOKIE};

/// Session id resolved by the session middleware for this request.
#[derive(Clone, Debug)]
pub struct SessionId(pub String);

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

pub fn session_for(state: &AppState, sid: &SessionId) -> Arc<Session> {
    state.sessions.get_or_create(&sid.0)
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub api_hostname: String,
    pub base_url: String,
    pub canonical_url: String,
    pub toasts: Vec<Toast>,
    pub has_toasts: bool,
}

/// Fields every page template carries. Pending toasts are consumed here.
pub fn build_template_globals(state: &AppState, session: &Session, path: &str) -> TemplateGlobals {
    let toasts = session.take_toasts();
    let has_toasts = !toasts.is_empty();
    TemplateGlobals {
        api_hostname: crate::utils::hostname_from_url(&state.api_base_url),
        base_url: state.public_base_url.clone(),
        canonical_url: crate::utils::absolute_url(&state.public_base_url, path),
        toasts,
        has_toasts,
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    render_template_with_status(StatusCode::OK, t)
}

pub fn render_template_with_status<T: askama::Template>(status: StatusCode, t: T) -> Response {
    match t.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
