use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_app(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state.custom_css.clone().unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::search::index_get))
        .route("/search", get(handlers::search::search_get).post(handlers::search::search_post))
        .route("/dashboard", get(handlers::dashboard::dashboard_get))
        .route("/products/:product_id/save", post(handlers::dashboard::toggle_saved))
        .route("/chat", get(handlers::chat::chat_get).post(handlers::chat::chat_post))
        .route("/chat/clear", post(handlers::chat::chat_clear))
        .route("/chat/export", get(handlers::chat::chat_export))
        .route("/static/styles.css", get(move || {
            let css = stylesheet_content.clone();
            async move {
                (
                    [
                        (CONTENT_TYPE, "text/css"),
                        (CACHE_CONTROL, "public, max-age=3600"),
                    ],
                    css,
                )
            }
        }))
        .fallback(handlers::not_found::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Pages carry per-session state
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ))
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    handlers::middleware::session_middleware,
                )),
        )
        .with_state(state)
}
