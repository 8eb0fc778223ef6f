use axum::{
    extract::{Form, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use serde::Deserialize;

use crate::handlers::helpers::{build_template_globals, render_template, session_for, SessionId, TemplateGlobals};
use crate::models::{AppState, Toast};
use crate::templates::ChatTemplate;

#[derive(Deserialize, Default)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

pub async fn chat_get(State(state): State<AppState>, Extension(sid): Extension<SessionId>) -> Response {
    let session = session_for(&state, &sid);
    let messages = session.transcript.lock().unwrap().messages().to_vec();
    let suggestions = state.catalog.chat_suggestions();
    let recent_products = state.catalog.recent_products();

    let TemplateGlobals { api_hostname, base_url, canonical_url, toasts, has_toasts } =
        build_template_globals(&state, &session, "/chat");
    render_template(ChatTemplate {
        api_hostname,
        base_url,
        canonical_url,
        active_nav: "chat",
        toasts,
        has_toasts,
        messages: &messages,
        loading: session.chat.is_loading(),
        suggestions: &suggestions,
        recent_products: &recent_products,
    })
}

pub async fn chat_post(
    State(state): State<AppState>,
    Extension(sid): Extension<SessionId>,
    Form(form): Form<ChatForm>,
) -> Response {
    let session = session_for(&state, &sid);
    let ticket = match session.chat.begin(&form.message) {
        Ok(ticket) => ticket,
        Err(rejection) => {
            tracing::debug!(?rejection, "Chat message not sent");
            return Redirect::to("/chat").into_response();
        }
    };

    let generation = {
        let mut transcript = session.transcript.lock().unwrap();
        transcript.push_user(ticket.query());
        transcript.generation()
    };

    let outcome = ticket.run().await;
    if let Some(toast) = outcome.toast() {
        session.push_toast(toast);
    }
    session.transcript.lock().unwrap().apply_outcome(generation, &outcome);

    Redirect::to("/chat").into_response()
}

/// Abort any pending reply and start over from the greeting.
pub async fn chat_clear(State(state): State<AppState>, Extension(sid): Extension<SessionId>) -> Response {
    let session = session_for(&state, &sid);
    session.chat.cancel();
    session.transcript.lock().unwrap().clear();
    session.push_toast(Toast::info(
        "Chat cleared",
        "All messages have been removed from the current session.",
    ));
    Redirect::to("/chat").into_response()
}

pub async fn chat_export(State(state): State<AppState>, Extension(sid): Extension<SessionId>) -> Response {
    let session = session_for(&state, &sid);
    let exported = session.transcript.lock().unwrap().export_json();
    match exported {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"assessaid-chat.json\""),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(%e, "Failed to export chat transcript");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
