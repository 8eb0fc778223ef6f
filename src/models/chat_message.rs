use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::assessment::Assessment;
use crate::utils::clock_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
}

impl Role {
    pub fn is_user(&self) -> bool {
        matches!(self, Role::User)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Assessment>>,
}

impl ChatMessage {
    pub fn assessments(&self) -> &[Assessment] {
        self.recommendations.as_deref().unwrap_or(&[])
    }

    pub fn time_label(&self) -> String {
        clock_label(&self.timestamp)
    }
}
