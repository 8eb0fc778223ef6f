use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::api::RecommendError;
use crate::flow::recommender::Recommender;
use crate::models::{Assessment, RecommendationResponse, Toast};

/// Trim a raw query; `None` when nothing is left to send.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Why a submission never reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Empty or whitespace-only query
    Empty,
    /// The previous request of this flow is still outstanding
    Busy,
}

/// Result of one pass through the flow.
#[derive(Debug)]
pub enum FlowOutcome {
    Rejected(Rejection),
    /// `status == "success"` with at least one assessment
    Results(RecommendationResponse),
    /// Any other successful answer; render its message
    NoMatches(RecommendationResponse),
    Failed(RecommendError),
    /// The request was aborted and its answer must not be rendered
    Cancelled,
}

impl FlowOutcome {
    fn from_response(response: RecommendationResponse) -> Self {
        if response.has_results() {
            FlowOutcome::Results(response)
        } else {
            FlowOutcome::NoMatches(response)
        }
    }

    /// Notification to show for this outcome. Only failures produce one.
    pub fn toast(&self) -> Option<Toast> {
        match self {
            FlowOutcome::Failed(_) => Some(Toast::fetch_failed()),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&RecommendationResponse> {
        match self {
            FlowOutcome::Results(r) | FlowOutcome::NoMatches(r) => Some(r),
            _ => None,
        }
    }

    pub fn assessments(&self) -> &[Assessment] {
        match self {
            FlowOutcome::Results(r) => &r.recommended_assessments,
            _ => &[],
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FlowOutcome::Cancelled)
    }
}

/// Clears the loading flag however the owning ticket ends, including when its
/// future is dropped mid-request.
struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// An accepted submission. Holding it keeps the flow in the loading state.
pub struct Ticket {
    flow: &'static str,
    query: String,
    recommender: Arc<dyn Recommender>,
    token: CancellationToken,
    _guard: LoadingGuard,
}

impl Ticket {
    /// The trimmed query that will be sent.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub async fn run(self) -> FlowOutcome {
        let Ticket { flow, query, recommender, token, _guard } = self;
        if token.is_cancelled() {
            return FlowOutcome::Cancelled;
        }
        tracing::info!(flow, query = %query, "Fetching recommendations");

        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => FlowOutcome::Cancelled,
            result = recommender.recommend(&query) => match result {
                Ok(response) => FlowOutcome::from_response(response),
                Err(e) => FlowOutcome::Failed(e),
            },
        };

        match &outcome {
            FlowOutcome::Results(r) => {
                tracing::info!(flow, count = r.recommended_assessments.len(), "Recommendations received");
            }
            FlowOutcome::NoMatches(r) => {
                tracing::info!(flow, status = %r.status, "No matching assessments");
            }
            FlowOutcome::Failed(e) => {
                tracing::error!(flow, error = %e, "Failed to fetch recommendations");
            }
            FlowOutcome::Cancelled => {
                tracing::info!(flow, "Recommendation request cancelled");
            }
            FlowOutcome::Rejected(_) => {}
        }
        outcome
    }
}

/// One interaction surface (search box or chat box): at most one request in
/// flight, gated by a loading flag, abortable through a cancellation token.
pub struct QueryFlow {
    name: &'static str,
    recommender: Arc<dyn Recommender>,
    loading: Arc<AtomicBool>,
    parent: CancellationToken,
    current: Mutex<CancellationToken>,
}

impl QueryFlow {
    pub fn new(name: &'static str, recommender: Arc<dyn Recommender>, parent: CancellationToken) -> Self {
        let current = Mutex::new(parent.child_token());
        Self {
            name,
            recommender,
            loading: Arc::new(AtomicBool::new(false)),
            parent,
            current,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Accept a submission or say why not. No network traffic happens here.
    pub fn begin(&self, raw: &str) -> Result<Ticket, Rejection> {
        let query = normalize_query(raw).ok_or(Rejection::Empty)?;
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(flow = self.name, "Submission rejected while a request is outstanding");
            return Err(Rejection::Busy);
        }
        let guard = LoadingGuard(self.loading.clone());
        let token = self.current.lock().unwrap().clone();
        Ok(Ticket {
            flow: self.name,
            query,
            recommender: self.recommender.clone(),
            token,
            _guard: guard,
        })
    }

    pub async fn submit(&self, raw: &str) -> FlowOutcome {
        match self.begin(raw) {
            Ok(ticket) => ticket.run().await,
            Err(rejection) => FlowOutcome::Rejected(rejection),
        }
    }

    /// Abort the in-flight request, if any. Later submissions get a fresh token.
    pub fn cancel(&self) {
        let mut current = self.current.lock().unwrap();
        current.cancel();
        *current = self.parent.child_token();
    }
}
