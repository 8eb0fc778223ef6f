use serde::Serialize;

pub const FETCH_FAILED_DESCRIPTION: &str = "Failed to fetch recommendations. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Default => "default",
            ToastVariant::Destructive => "destructive",
        }
    }
}

/// A one-shot notification rendered on the next page view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Destructive }
    }

    /// The single notification every failed recommendation fetch collapses to.
    pub fn fetch_failed() -> Self {
        Self::error("Error", FETCH_FAILED_DESCRIPTION)
    }
}
