use askama::Template;

use crate::models::{Assessment, Toast};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub api_hostname: String,
    pub base_url: String,
    pub canonical_url: String,
    pub active_nav: &'static str,
    pub toasts: Vec<Toast>,
    pub has_toasts: bool,
    pub query: String,
    pub loading: bool,
    pub show_result: bool,
    pub result_heading: String,
    pub result_message: String,
    pub assessments: &'a [Assessment],
}
