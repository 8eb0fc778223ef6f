use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::catalog::Catalog;
use crate::flow::Recommender;
use crate::sessions::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub catalog: Arc<dyn Catalog>,
    /// Base URL of the recommendation service, shown in the footer.
    pub api_base_url: String,
    pub public_base_url: String,
    pub custom_css: Option<String>,
    /// Cancelled on shutdown; every flow's token descends from it.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        recommender: Arc<dyn Recommender>,
        catalog: Arc<dyn Catalog>,
        api_base_url: String,
        public_base_url: String,
    ) -> Self {
        let shutdown = CancellationToken::new();
        Self {
            sessions: SessionStore::new(recommender, shutdown.clone()),
            catalog,
            api_base_url,
            public_base_url,
            custom_css: None,
            shutdown,
        }
    }
}
