use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::browse::BrowseSession;

pub type SharedSession = Arc<Mutex<BrowseSession>>;

/// In-memory home for browse sessions. Idle sessions expire on their own.
pub struct SessionStore {
    sessions: Cache<Uuid, SharedSession>,
}

impl SessionStore {
    pub fn new(max_capacity: u64, idle: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_idle(idle) // refreshes on access
                .build(),
        }
    }

    pub async fn insert(&self, session: BrowseSession) -> SharedSession {
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(id, shared.clone()).await;
        shared
    }

    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.sessions.get(&id).await
    }

    /// Returns false when there was nothing to remove
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).await.is_some()
    }
}
