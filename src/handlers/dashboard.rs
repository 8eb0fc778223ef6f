use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Extension,
};
use serde::Deserialize;

use crate::handlers::helpers::{build_template_globals, render_template, session_for, SessionId, TemplateGlobals};
use crate::handlers::not_found::render_not_found;
use crate::models::{AppState, Toast};
use crate::templates::{DashboardTemplate, ProductTile, SearchLink};

#[derive(Deserialize, Default)]
pub struct TabQuery {
    pub tab: Option<String>,
}

fn resolve_tab(raw: Option<&str>) -> &'static str {
    match raw {
        Some("recent") => "recent",
        Some("saved") => "saved",
        _ => "overview",
    }
}

pub async fn dashboard_get(
    State(state): State<AppState>,
    Extension(sid): Extension<SessionId>,
    Query(q): Query<TabQuery>,
) -> Response {
    let session = session_for(&state, &sid);
    let catalog = state.catalog.as_ref();
    let active_tab = resolve_tab(q.tab.as_deref());
    let saved = session.saved.lock().unwrap().clone();

    let recent_searches: Vec<SearchLink> = catalog.recent_searches().iter().map(|s| SearchLink::new(s)).collect();
    let trending = ProductTile::list(catalog.trending_products(), &saved, catalog);
    let recent = ProductTile::list(catalog.recent_products(), &saved, catalog);
    let saved_tiles = ProductTile::list(saved.saved_products(catalog), &saved, catalog);

    let TemplateGlobals { api_hostname, base_url, canonical_url, toasts, has_toasts } =
        build_template_globals(&state, &session, "/dashboard");
    render_template(DashboardTemplate {
        api_hostname,
        base_url,
        canonical_url,
        active_nav: "dashboard",
        toasts,
        has_toasts,
        active_tab,
        recent_searches: &recent_searches,
        trending: &trending,
        recent: &recent,
        saved: &saved_tiles,
    })
}

pub async fn toggle_saved(
    State(state): State<AppState>,
    Extension(sid): Extension<SessionId>,
    Path(product_id): Path<String>,
    Form(form): Form<TabQuery>,
) -> Response {
    let session = session_for(&state, &sid);
    let catalog = state.catalog.as_ref();
    let Some(product) = catalog.product(&product_id) else {
        tracing::warn!(product_id = %product_id, "Save requested for unknown product");
        return render_not_found(&state, &session, &format!("/products/{}/save", product_id));
    };

    let now_saved = session.saved.lock().unwrap().toggle(catalog, &product.id);
    let toast = if now_saved {
        Toast::info("Added to saved items", format!("{} has been added to your saved list.", product.title))
    } else {
        Toast::error("Removed from saved items", format!("{} has been removed from your saved list.", product.title))
    };
    session.push_toast(toast);

    let tab = resolve_tab(form.tab.as_deref());
    Redirect::to(&format!("/dashboard?tab={}", tab)).into_response()
}
