use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::{CatalogServiceError, CategorySummary, ResourceRepository};
use crate::domain::resource::{Resource, ResourceInput};

#[derive(Debug, Clone, Copy)]
enum Counter {
    Visits,
    Clicks,
}

/// Event counts recorded since the snapshot was last published
#[derive(Debug, Default, Clone, Copy)]
struct PendingCounts {
    visits: u64,
    clicks: u64,
}

#[derive(Default)]
struct CatalogState {
    snapshot: Arc<Vec<Resource>>,
    positions: HashMap<String, usize>,
    pending: HashMap<String, PendingCounts>,
}

impl CatalogState {
    fn replace(&mut self, resources: Vec<Resource>) {
        self.snapshot = Arc::new(resources);
        self.pending.clear();
        self.reindex();
    }

    fn reindex(&mut self) {
        self.positions = self
            .snapshot
            .iter()
            .enumerate()
            .map(|(position, r)| (r.id.clone(), position))
            .collect();
    }

    /// Folds pending counts into a fresh snapshot
    fn publish_counts(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let resources = Arc::make_mut(&mut self.snapshot);
        for (id, counts) in self.pending.drain() {
            if let Some(&position) = self.positions.get(&id) {
                let resource = &mut resources[position];
                resource.visits = add_count(resource.visits, counts.visits);
                resource.clicks = add_count(resource.clicks, counts.clicks);
            }
        }
    }
}

// A counter nobody has bumped stays unset, so it keeps sorting last
fn add_count(current: Option<u64>, delta: u64) -> Option<u64> {
    if delta == 0 {
        current
    } else {
        Some(current.unwrap_or(0).saturating_add(delta))
    }
}

/// Holds the current point-in-time collection.
///
/// Readers take an `Arc` of the snapshot and keep it for as long as they need,
/// writers build a new vector and swap it in under the lock, so nobody ever
/// observes a half-applied refresh. Event counters accumulate beside the
/// snapshot and are folded in by the next reader.
pub struct CatalogService {
    repository: Arc<dyn ResourceRepository>,
    state: RwLock<CatalogState>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self {
            repository,
            state: RwLock::new(CatalogState::default()),
        }
    }

    /// Re-fetch the collection and swap it in. The previous snapshot stays
    /// in place when the repository fails. Counters restart from the
    /// repository's values.
    pub async fn refresh(&self) -> Result<usize, CatalogServiceError> {
        let resources = self
            .repository
            .fetch_all()
            .await
            .map_err(|e| CatalogServiceError::Dependency(e.to_string()))?;

        let count = resources.len();
        self.state.write().replace(resources);

        tracing::info!(resource_count = count, "Catalog refreshed");
        Ok(count)
    }

    pub fn snapshot(&self) -> Arc<Vec<Resource>> {
        {
            let state = self.state.read();
            if state.pending.is_empty() {
                return state.snapshot.clone();
            }
        }
        let mut state = self.state.write();
        state.publish_counts();
        state.snapshot.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct categories, alphabetical
    pub fn categories(&self) -> Vec<CategorySummary> {
        let snapshot = self.snapshot();
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for resource in snapshot.iter() {
            *counts.entry(resource.category.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(name, count)| CategorySummary {
                name: name.to_string(),
                count,
            })
            .collect()
    }

    /// Appends a validated resource; ids must stay unique
    pub fn add(&self, input: ResourceInput) -> Result<Resource, CatalogServiceError> {
        let resource = Resource::try_from(input)?;

        let mut state = self.state.write();
        if state.positions.contains_key(&resource.id) {
            return Err(CatalogServiceError::Conflict(resource.id));
        }
        let position = state.snapshot.len();
        Arc::make_mut(&mut state.snapshot).push(resource.clone());
        state.positions.insert(resource.id.clone(), position);

        tracing::info!(resource_id = %resource.id, category = %resource.category, "Resource added");
        Ok(resource)
    }

    pub fn remove(&self, id: &str) -> Result<(), CatalogServiceError> {
        let mut state = self.state.write();
        let position = *state
            .positions
            .get(id)
            .ok_or(CatalogServiceError::NotFound)?;
        Arc::make_mut(&mut state.snapshot).remove(position);
        state.pending.remove(id);
        state.reindex();

        tracing::info!(resource_id = %id, "Resource removed");
        Ok(())
    }

    pub fn increment_visits(&self, id: &str) -> Result<u64, CatalogServiceError> {
        self.increment(id, Counter::Visits)
    }

    pub fn increment_clicks(&self, id: &str) -> Result<u64, CatalogServiceError> {
        self.increment(id, Counter::Clicks)
    }

    fn increment(&self, id: &str, counter: Counter) -> Result<u64, CatalogServiceError> {
        let mut state = self.state.write();
        let position = *state
            .positions
            .get(id)
            .ok_or(CatalogServiceError::NotFound)?;

        let resource = &state.snapshot[position];
        let published = match counter {
            Counter::Visits => resource.visits,
            Counter::Clicks => resource.clicks,
        }
        .unwrap_or(0);

        let pending = state.pending.entry(id.to_string()).or_default();
        let delta = match counter {
            Counter::Visits => &mut pending.visits,
            Counter::Clicks => &mut pending.clicks,
        };
        *delta += 1;

        Ok(published.saturating_add(*delta))
    }
}
