use askama::Template;

use crate::models::{ChatMessage, ProductCard, Toast};

#[derive(Template)]
#[template(path = "chat.html")]
pub struct ChatTemplate<'a> {
    pub api_hostname: String,
    pub base_url: String,
    pub canonical_url: String,
    pub active_nav: &'static str,
    pub toasts: Vec<Toast>,
    pub has_toasts: bool,
    pub messages: &'a [ChatMessage],
    pub loading: bool,
    pub suggestions: &'a [String],
    pub recent_products: &'a [ProductCard],
}
