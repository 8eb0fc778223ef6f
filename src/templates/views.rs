use crate::catalog::{Catalog, SavedSet};
use crate::flow::FlowOutcome;
use crate::models::{Assessment, ProductCard};
use crate::utils::search_href;

pub const RESULTS_HEADING: &str = "Recommended Assessments";
pub const NO_MATCHES_HEADING: &str = "No Matches Found";

/// A recent-search shortcut.
#[derive(Debug, Clone)]
pub struct SearchLink {
    pub label: String,
    pub href: String,
}

impl SearchLink {
    pub fn new(label: &str) -> Self {
        Self { label: label.to_string(), href: search_href(label) }
    }
}

/// A catalog product plus this session's bookmark state.
#[derive(Debug, Clone)]
pub struct ProductTile {
    pub product: ProductCard,
    pub saved: bool,
}

impl ProductTile {
    pub fn list(products: Vec<ProductCard>, saved: &SavedSet, catalog: &dyn Catalog) -> Vec<ProductTile> {
        products
            .into_iter()
            .map(|product| {
                let is_saved = saved.is_saved(catalog, &product.id);
                ProductTile { product, saved: is_saved }
            })
            .collect()
    }
}

/// What the landing page shows below the search box.
#[derive(Debug, Clone, Default)]
pub struct SearchResultView {
    pub visible: bool,
    pub heading: String,
    pub message: String,
    pub assessments: Vec<Assessment>,
}

impl SearchResultView {
    /// Cards for a successful non-empty answer, the service message for any
    /// other answer, nothing for failures, cancellations and rejections.
    pub fn from_outcome(outcome: &FlowOutcome) -> Self {
        match outcome.response() {
            Some(response) => {
                let heading = if response.is_success() { RESULTS_HEADING } else { NO_MATCHES_HEADING };
                Self {
                    visible: true,
                    heading: heading.to_string(),
                    message: response.message.clone(),
                    assessments: outcome.assessments().to_vec(),
                }
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecommendError;
    use crate::flow::Rejection;
    use crate::models::RecommendationResponse;

    #[test]
    fn test_failure_renders_nothing() {
        let view = SearchResultView::from_outcome(&FlowOutcome::Failed(RecommendError::InvalidResponse("x".into())));
        assert!(!view.visible);
        let view = SearchResultView::from_outcome(&FlowOutcome::Rejected(Rejection::Empty));
        assert!(!view.visible);
    }

    #[test]
    fn test_non_success_status_heading() {
        let response = RecommendationResponse {
            status: "no_match".into(),
            message: "Try rephrasing".into(),
            recommended_assessments: vec![],
        };
        let view = SearchResultView::from_outcome(&FlowOutcome::NoMatches(response));
        assert!(view.visible);
        assert_eq!(view.heading, NO_MATCHES_HEADING);
        assert_eq!(view.message, "Try rephrasing");
        assert!(view.assessments.is_empty());
    }
}
