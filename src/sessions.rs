use rand::RngCore;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::catalog::SavedSet;
use crate::chat::ChatTranscript;
use crate::flow::{QueryFlow, Recommender};
use crate::models::Toast;

pub const SESSION_COOKIE: &str = "session_id";

/// Oldest sessions are dropped past this many.
const MAX_SESSIONS: usize = 1000;

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex::encode(b)
}

/// Everything one visitor's screens hold: a flow per interaction surface,
/// the chat transcript, bookmark toggles and pending notifications.
pub struct Session {
    pub search: QueryFlow,
    pub chat: QueryFlow,
    pub transcript: Mutex<ChatTranscript>,
    pub saved: Mutex<SavedSet>,
    toasts: Mutex<Vec<Toast>>,
}

impl Session {
    fn new(recommender: Arc<dyn Recommender>, shutdown: &CancellationToken) -> Self {
        Self {
            search: QueryFlow::new("search", recommender.clone(), shutdown.child_token()),
            chat: QueryFlow::new("chat", recommender, shutdown.child_token()),
            transcript: Mutex::new(ChatTranscript::new()),
            saved: Mutex::new(SavedSet::new()),
            toasts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_toast(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }

    /// Pending notifications; each is returned once.
    pub fn take_toasts(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.lock().unwrap())
    }

    /// Abort whatever either flow has in flight.
    pub fn cancel_all(&self) {
        self.search.cancel();
        self.chat.cancel();
    }
}

#[derive(Default)]
struct StoreInner {
    sessions: HashMap<String, Arc<Session>>,
    order: VecDeque<String>,
}

/// Bounded in-memory session map keyed by the session cookie.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
    recommender: Arc<dyn Recommender>,
    shutdown: CancellationToken,
}

impl SessionStore {
    pub fn new(recommender: Arc<dyn Recommender>, shutdown: CancellationToken) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
            recommender,
            shutdown,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().unwrap().sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a new session and return its id.
    pub fn create(&self) -> String {
        let id = random_session_id();
        self.insert(id.clone());
        id
    }

    fn insert(&self, id: String) -> Arc<Session> {
        let session = Arc::new(Session::new(self.recommender.clone(), &self.shutdown));
        let mut inner = self.inner.lock().unwrap();
        inner.sessions.insert(id.clone(), session.clone());
        inner.order.push_back(id);
        while inner.order.len() > MAX_SESSIONS {
            if let Some(oldest) = inner.order.pop_front() {
                if let Some(evicted) = inner.sessions.remove(&oldest) {
                    evicted.cancel_all();
                }
                tracing::debug!(session = %oldest, "Evicted session");
            }
        }
        session
    }

    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.inner.lock().unwrap().sessions.get(id).cloned()
    }

    pub fn get_or_create(&self, id: &str) -> Arc<Session> {
        if let Some(session) = self.get(id) {
            return session;
        }
        self.insert(id.to_string())
    }
}
