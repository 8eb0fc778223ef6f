use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::error::RecommendError;
use crate::config::{endpoint_url, HEALTH_ENDPOINT, RECOMMEND_ENDPOINT};
use crate::models::RecommendationResponse;

static SILENT: AtomicBool = AtomicBool::new(false);

/// Longest error body kept in a `RecommendError::Status`.
const MAX_ERROR_BODY: usize = 300;

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Echo the request as an equivalent curl command.
fn log_request(method: &str, url: &str, body: Option<&Value>) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

    if let Some(d) = body {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let escaped_json = d.to_string().replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

fn log_response(status: StatusCode, body: &str) {
    let line = format!("{} {}", status.as_u16(), body);
    log_output(format!("Response:\n{}", Paint::new(line).rgb(100, 100, 100)));
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

/// Shared HTTP client with the crate's user agent.
pub fn build_http_client() -> Result<reqwest::Client, RecommendError> {
    let client = reqwest::Client::builder()
        .user_agent(format!("AssessAid/{}", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// What `GET /health` reports about the service.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Client for the recommendation service rooted at one base URL.
#[derive(Clone)]
pub struct RecommendClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecommendClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recommend_url(&self) -> String {
        endpoint_url(&self.base_url, RECOMMEND_ENDPOINT)
    }

    /// `POST /recommend` with `{"query": query}`. Sent exactly once.
    pub async fn recommend(&self, query: &str) -> Result<RecommendationResponse, RecommendError> {
        let url = self.recommend_url();
        let body = json!({ "query": query });
        log_request("POST", &url, Some(&body));

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        log_response(status, &text);

        if !status.is_success() {
            return Err(RecommendError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            });
        }

        let parsed: RecommendationResponse = serde_json::from_str(&text)?;
        if let Some(id) = parsed.duplicate_product_id() {
            return Err(RecommendError::InvalidResponse(format!("duplicate product_id '{}'", id)));
        }
        Ok(parsed)
    }

    pub async fn health(&self) -> Result<HealthReport, RecommendError> {
        let url = endpoint_url(&self.base_url, HEALTH_ENDPOINT);
        log_request("GET", &url, None);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        log_response(status, &text);

        // The service answers 503 with a JSON status while it is still warming up.
        match serde_json::from_str::<HealthReport>(&text) {
            Ok(report) => Ok(report),
            Err(_) if !status.is_success() => Err(RecommendError::Status {
                status: status.as_u16(),
                body: truncate_body(&text),
            }),
            Err(e) => Err(RecommendError::Decode(e)),
        }
    }
}
