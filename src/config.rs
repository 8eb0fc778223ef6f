use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RECOMMEND_API_BASE_URL: &str = "https://ankys34-shl-back.hf.space";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
pub const RECOMMEND_ENDPOINT: &str = "/recommend";
pub const HEALTH_ENDPOINT: &str = "/health";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Base URL of the recommendation service. Both the landing search and the
/// chat assistant talk to this one host.
pub fn get_recommend_api_base_url() -> String {
    let raw = env::var("RECOMMEND_API_BASE_URL").unwrap_or_default();
    sanitize_base_url(&raw, DEFAULT_RECOMMEND_API_BASE_URL)
}

pub fn get_public_base_url() -> String {
    let raw = env::var("PUBLIC_BASE_URL").unwrap_or_default();
    sanitize_base_url(&raw, DEFAULT_PUBLIC_BASE_URL)
}

pub fn sanitize_base_url(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.trim_end_matches('/').to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}
