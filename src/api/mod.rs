pub mod client;
pub mod error;

pub use client::{build_http_client, set_silent, HealthReport, RecommendClient};
pub use error::RecommendError;
