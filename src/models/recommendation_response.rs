use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::assessment::Assessment;

pub const SUCCESS_STATUS: &str = "success";

/// Body of a `POST /recommend` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub recommended_assessments: Vec<Assessment>,
}

impl RecommendationResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// True when there is at least one card to render.
    pub fn has_results(&self) -> bool {
        self.is_success() && !self.recommended_assessments.is_empty()
    }

    /// First `product_id` that appears more than once, if any.
    pub fn duplicate_product_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.recommended_assessments
            .iter()
            .map(|a| a.product_id.as_str())
            .find(|id| !seen.insert(*id))
    }
}
