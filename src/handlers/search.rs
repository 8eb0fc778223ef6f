use axum::{
    extract::{Form, Query, State},
    response::Response,
    Extension,
};
use serde::Deserialize;

use crate::handlers::helpers::{build_template_globals, render_template, session_for, SessionId, TemplateGlobals};
use crate::models::AppState;
use crate::sessions::Session;
use crate::templates::{IndexTemplate, SearchResultView};

#[derive(Deserialize, Default)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

pub async fn index_get(State(state): State<AppState>, Extension(sid): Extension<SessionId>) -> Response {
    let session = session_for(&state, &sid);
    render_index(&state, &session, "", &SearchResultView::default())
}

pub async fn search_post(
    State(state): State<AppState>,
    Extension(sid): Extension<SessionId>,
    Form(form): Form<SearchForm>,
) -> Response {
    run_search(&state, &sid, &form.query).await
}

/// Same as the form post; used by recent-search links.
pub async fn search_get(
    State(state): State<AppState>,
    Extension(sid): Extension<SessionId>,
    Query(form): Query<SearchForm>,
) -> Response {
    run_search(&state, &sid, &form.query).await
}

async fn run_search(state: &AppState, sid: &SessionId, raw: &str) -> Response {
    let session = session_for(state, sid);
    let outcome = session.search.submit(raw).await;
    if let Some(toast) = outcome.toast() {
        session.push_toast(toast);
    }
    let view = SearchResultView::from_outcome(&outcome);
    render_index(state, &session, raw.trim(), &view)
}

fn render_index(state: &AppState, session: &Session, query: &str, view: &SearchResultView) -> Response {
    let TemplateGlobals { api_hostname, base_url, canonical_url, toasts, has_toasts } =
        build_template_globals(state, session, "/");
    render_template(IndexTemplate {
        api_hostname,
        base_url,
        canonical_url,
        active_nav: "home",
        toasts,
        has_toasts,
        query: query.to_string(),
        loading: session.search.is_loading(),
        show_result: view.visible,
        result_heading: view.heading.clone(),
        result_message: view.message.clone(),
        assessments: &view.assessments,
    })
}
