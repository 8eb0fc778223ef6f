// URL handling utilities
pub mod url_parser;
pub mod url_builder;

// Display helpers
pub mod clock;

pub use url_parser::hostname_from_url;
pub use url_builder::{absolute_url, search_href};
pub use clock::clock_label;
