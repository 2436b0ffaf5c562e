use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use super::{QueryUpdate, VisibleObserver};
use crate::domain::access::{annotate_all, AccessContext, AnnotatedResource, Visibility};
use crate::domain::query::{compute_visible, QueryError, QueryState, SearchTerms, SortBy, SortDirection, ViewMode};
use crate::domain::resource::Resource;
use crate::domain::window::{
    has_more, visible_slice, LoadMoreOutcome, SearchDebouncer, WindowController, WindowSettings,
};

/// How many alternative categories to suggest when a search finds nothing
const RELATED_CATEGORY_LIMIT: usize = 4;

/// The composed result: filtered, sorted, windowed and gated
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView<'a> {
    pub items: Vec<AnnotatedResource<'a>>,
    pub total: usize,
    pub has_more: bool,
    pub related_categories: Vec<String>,
}

/// One user's browsing state over whatever catalog snapshot it is handed
pub struct BrowseSession {
    id: Uuid,
    query: QueryState,
    window: WindowController,
    debouncer: SearchDebouncer,
    observers: Vec<Arc<dyn VisibleObserver>>,
    last_published: Option<Vec<(String, Visibility)>>,
}

impl BrowseSession {
    pub fn new(id: Uuid, settings: &WindowSettings) -> Self {
        Self {
            id,
            query: QueryState::new(settings.batch_size),
            window: WindowController::new(settings.load_more_throttle),
            debouncer: SearchDebouncer::new(settings.search_debounce),
            observers: Vec::new(),
            last_published: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn VisibleObserver>) {
        self.observers.push(observer);
    }

    /// Applies a search immediately, dropping any debounced input
    pub fn set_search_query(&mut self, query: impl Into<String>) -> bool {
        self.debouncer.cancel();
        self.query.set_search_query(query)
    }

    /// Keystroke-style input; applied once the quiet period has passed
    pub fn input_search(&mut self, query: impl Into<String>, now: Instant) {
        self.debouncer.input(query, now);
    }

    pub fn set_selected_category(&mut self, category: Option<String>) -> bool {
        self.query.set_selected_category(category)
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.query.set_sort_by(sort_by);
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.query.set_sort_direction(direction);
    }

    pub fn toggle_sort_direction(&mut self) {
        self.query.toggle_sort_direction();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.query.set_view_mode(view_mode);
    }

    /// Validates every field before touching the state, so a bad field
    /// leaves the whole query unchanged
    pub fn apply(&mut self, update: QueryUpdate) -> Result<(), QueryError> {
        let sort_by = update.sort_by.as_deref().map(str::parse::<SortBy>).transpose()?;
        let direction = update
            .sort_direction
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()?;
        let view_mode = update
            .view_mode
            .as_deref()
            .map(str::parse::<ViewMode>)
            .transpose()?;

        if let Some(search) = update.search_query {
            self.set_search_query(search);
        }
        if let Some(category) = update.selected_category {
            self.set_selected_category(category);
        }
        if let Some(sort_by) = sort_by {
            self.set_sort_by(sort_by);
        }
        if let Some(direction) = direction {
            self.set_sort_direction(direction);
        }
        if update.toggle_sort_direction {
            self.toggle_sort_direction();
        }
        if let Some(view_mode) = view_mode {
            self.set_view_mode(view_mode);
        }
        Ok(())
    }

    pub fn load_more(&mut self, collection: &[Resource], now: Instant) -> LoadMoreOutcome {
        if self.settle(now) {
            return LoadMoreOutcome::Superseded;
        }
        let total = compute_visible(collection, &self.query).len();
        self.window.load_more(&mut self.query, total, now)
    }

    pub fn reset(&mut self) {
        self.query.reset();
        self.window.clear();
        self.debouncer.cancel();
    }

    /// Computes the current result and notifies observers when it differs
    /// from the last one they saw.
    pub fn view<'a>(
        &mut self,
        collection: &'a [Resource],
        access: Option<&AccessContext>,
        now: Instant,
    ) -> BrowseView<'a> {
        self.settle(now);

        let ordered = compute_visible(collection, &self.query);
        let total = ordered.len();
        let window = visible_slice(&ordered, self.query.display_count());
        let items = annotate_all(window, access);

        let related_categories =
            if total == 0 && !SearchTerms::parse(self.query.search_query()).is_empty() {
                related_categories(collection, self.query.selected_category())
            } else {
                Vec::new()
            };

        self.publish(&items);

        BrowseView {
            items,
            total,
            has_more: has_more(self.query.display_count(), total),
            related_categories,
        }
    }

    /// Applies a debounced search whose quiet period has passed. Returns
    /// whether the query changed.
    fn settle(&mut self, now: Instant) -> bool {
        let Some(search) = self.debouncer.settle(now) else {
            return false;
        };
        let changed = self.query.set_search_query(search);
        if changed {
            tracing::debug!(
                session_id = %self.id,
                search_query = %self.query.search_query(),
                "Debounced search applied"
            );
        }
        changed
    }

    fn publish(&mut self, items: &[AnnotatedResource<'_>]) {
        let signature: Vec<(String, Visibility)> = items
            .iter()
            .map(|a| (a.resource.id.clone(), a.visibility))
            .collect();

        if self.last_published.as_ref() == Some(&signature) {
            return;
        }

        for observer in &self.observers {
            observer.on_visible_changed(self.id, items);
        }
        self.last_published = Some(signature);
    }
}

/// Alphabetical categories other than the selected one
fn related_categories(collection: &[Resource], selected: Option<&str>) -> Vec<String> {
    collection
        .iter()
        .map(|r| r.category.as_str())
        .filter(|c| Some(*c) != selected)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(RELATED_CATEGORY_LIMIT)
        .map(str::to_string)
        .collect()
}
