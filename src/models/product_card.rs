use serde::{Deserialize, Serialize};

/// A catalog entry shown on the dashboard and the chat side panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl ProductCard {
    pub fn new(id: &str, title: &str, description: &str, category: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn tags_label(&self) -> String {
        self.tags.join(", ")
    }
}
