use async_trait::async_trait;

use crate::api::{RecommendClient, RecommendError};
use crate::models::RecommendationResponse;

/// Anything that can turn a query into recommendations.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, query: &str) -> Result<RecommendationResponse, RecommendError>;
}

#[async_trait]
impl Recommender for RecommendClient {
    async fn recommend(&self, query: &str) -> Result<RecommendationResponse, RecommendError> {
        RecommendClient::recommend(self, query).await
    }
}
