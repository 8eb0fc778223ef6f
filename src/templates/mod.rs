pub mod views;
pub mod index_template;
pub mod dashboard_template;
pub mod chat_template;
pub mod not_found_template;

pub use views::{ProductTile, SearchLink, SearchResultView};
pub use index_template::IndexTemplate;
pub use dashboard_template::DashboardTemplate;
pub use chat_template::ChatTemplate;
pub use not_found_template::NotFoundTemplate;
