use askama::Template;

use crate::models::Toast;
use crate::templates::views::{ProductTile, SearchLink};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub api_hostname: String,
    pub base_url: String,
    pub canonical_url: String,
    pub active_nav: &'static str,
    pub toasts: Vec<Toast>,
    pub has_toasts: bool,
    pub active_tab: &'a str,
    pub recent_searches: &'a [SearchLink],
    pub trending: &'a [ProductTile],
    pub recent: &'a [ProductTile],
    pub saved: &'a [ProductTile],
}
