use serde::{Deserialize, Serialize};

pub const UNKNOWN_DURATION: &str = "N/A";

/// A recommended product as returned by the recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub product_id: String,
    pub product_name: String,
    pub url: String,
    pub adaptive_support: String,
    pub description: String,
    /// Minutes. The service sends `null` when unknown; a negative value
    /// fails decoding.
    #[serde(default)]
    pub duration: Option<u32>,
    pub remote_support: String,
    #[serde(default)]
    pub test_type: Vec<String>,
}

impl Assessment {
    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(minutes) => format!("{} minutes", minutes),
            None => UNKNOWN_DURATION.to_string(),
        }
    }

    pub fn test_types_label(&self) -> String {
        self.test_type.join(", ")
    }

    /// `url` if it is an http(s) link, otherwise `#`.
    pub fn safe_url(&self) -> &str {
        let lower = self.url.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            self.url.trim_start()
        } else {
            "#"
        }
    }
}
