use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
    Extension,
};

use crate::handlers::helpers::{build_template_globals, render_template_with_status, session_for, SessionId, TemplateGlobals};
use crate::models::AppState;
use crate::sessions::Session;
use crate::templates::NotFoundTemplate;

pub async fn not_found(State(state): State<AppState>, Extension(sid): Extension<SessionId>, uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "404 Error: User attempted to access non-existent route");
    let session = session_for(&state, &sid);
    render_not_found(&state, &session, uri.path())
}

pub fn render_not_found(state: &AppState, session: &Session, path: &str) -> Response {
    let TemplateGlobals { api_hostname, base_url, canonical_url, toasts, has_toasts } =
        build_template_globals(state, session, path);
    render_template_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            api_hostname,
            base_url,
            canonical_url,
            active_nav: "",
            toasts,
            has_toasts,
            path: path.to_string(),
        },
    )
}
