use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::error::BrowseServiceError;
use super::session::BrowseSession;
use super::{BrowseViewResponse, QueryUpdate, VisibleObserver};
use crate::domain::access::AccessContext;
use crate::domain::catalog::CatalogService;
use crate::domain::resource::Resource;
use crate::domain::window::{LoadMoreOutcome, WindowSettings};
use crate::infrastructure::sessions::SessionStore;

pub struct BrowseService {
    catalog: Arc<CatalogService>,
    sessions: Arc<SessionStore>,
    settings: WindowSettings,
    observers: Vec<Arc<dyn VisibleObserver>>,
}

impl BrowseService {
    pub fn new(
        catalog: Arc<CatalogService>,
        sessions: Arc<SessionStore>,
        settings: WindowSettings,
        observers: Vec<Arc<dyn VisibleObserver>>,
    ) -> Self {
        Self {
            catalog,
            sessions,
            settings,
            observers,
        }
    }
}

#[async_trait]
pub trait BrowseServiceApi: Send + Sync {
    async fn create_session(
        &self,
        initial: QueryUpdate,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError>;

    async fn get_view(
        &self,
        session_id: Uuid,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError>;

    async fn update_query(
        &self,
        session_id: Uuid,
        update: QueryUpdate,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError>;

    async fn search_input(
        &self,
        session_id: Uuid,
        text: String,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError>;

    async fn load_more(
        &self,
        session_id: Uuid,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError>;

    async fn reset(
        &self,
        session_id: Uuid,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError>;

    async fn end_session(&self, session_id: Uuid) -> Result<(), BrowseServiceError>;
}

#[async_trait]
impl BrowseServiceApi for BrowseService {
    async fn create_session(
        &self,
        initial: QueryUpdate,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError> {
        let mut session = BrowseSession::new(Uuid::new_v4(), &self.settings);
        session.apply(initial)?;
        for observer in &self.observers {
            session.subscribe(observer.clone());
        }

        let session_id = session.id();
        self.sessions.insert(session).await;
        tracing::info!(session_id = %session_id, "Browse session created");

        self.with_session(session_id, access, |_, _, _| Ok(())).await
    }

    async fn get_view(
        &self,
        session_id: Uuid,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError> {
        self.with_session(session_id, access, |_, _, _| Ok(())).await
    }

    async fn update_query(
        &self,
        session_id: Uuid,
        update: QueryUpdate,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError> {
        self.with_session(session_id, access, |session, _, _| {
            session.apply(update).map_err(BrowseServiceError::from)
        })
        .await
    }

    async fn search_input(
        &self,
        session_id: Uuid,
        text: String,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError> {
        self.with_session(session_id, access, |session, _, now| {
            session.input_search(text, now);
            Ok(())
        })
        .await
    }

    async fn load_more(
        &self,
        session_id: Uuid,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError> {
        self.with_session(session_id, access, |session, collection, now| {
            match session.load_more(collection, now) {
                LoadMoreOutcome::Grown { from, to } => {
                    tracing::info!(session_id = %session_id, from, to, "Loaded more resources");
                }
                LoadMoreOutcome::Throttled => {
                    tracing::debug!(session_id = %session_id, "Load more ignored (throttled)");
                }
                LoadMoreOutcome::Exhausted => {
                    tracing::debug!(session_id = %session_id, "Load more ignored (nothing left)");
                }
                LoadMoreOutcome::Superseded => {
                    tracing::debug!(session_id = %session_id, "Load more ignored (search settled)");
                }
            }
            Ok(())
        })
        .await
    }

    async fn reset(
        &self,
        session_id: Uuid,
        access: Option<AccessContext>,
    ) -> Result<BrowseViewResponse, BrowseServiceError> {
        self.with_session(session_id, access, |session, _, _| {
            session.reset();
            Ok(())
        })
        .await
    }

    async fn end_session(&self, session_id: Uuid) -> Result<(), BrowseServiceError> {
        if !self.sessions.remove(session_id).await {
            return Err(BrowseServiceError::SessionNotFound);
        }
        tracing::info!(session_id = %session_id, "Browse session ended");
        Ok(())
    }
}

impl BrowseService {
    /// Runs `mutate` and renders the view under the session's lock, against
    /// a single catalog snapshot taken up front.
    async fn with_session<F>(
        &self,
        session_id: Uuid,
        access: Option<AccessContext>,
        mutate: F,
    ) -> Result<BrowseViewResponse, BrowseServiceError>
    where
        F: FnOnce(&mut BrowseSession, &[Resource], Instant) -> Result<(), BrowseServiceError>
            + Send,
    {
        let shared = self
            .sessions
            .get(session_id)
            .await
            .ok_or(BrowseServiceError::SessionNotFound)?;

        let snapshot = self.catalog.snapshot();
        let now = Instant::now();

        let mut session = shared.lock().await;
        mutate(&mut *session, snapshot.as_slice(), now)?;
        let view = session.view(snapshot.as_slice(), access.as_ref(), now);

        Ok(BrowseViewResponse::from_view(&session, &view))
    }
}
