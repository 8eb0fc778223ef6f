use askama::Template;

use crate::models::Toast;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub api_hostname: String,
    pub base_url: String,
    pub canonical_url: String,
    pub active_nav: &'static str,
    pub toasts: Vec<Toast>,
    pub has_toasts: bool,
    pub path: String,
}
