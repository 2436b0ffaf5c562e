pub mod debounce;

pub use debounce::SearchDebouncer;

use std::time::{Duration, Instant};

use crate::domain::query::QueryState;

/// Items materialized per "load more" step
pub const BATCH_SIZE: usize = 9;

/// Minimum gap between two accepted "load more" requests
pub const LOAD_MORE_THROTTLE_MS: u64 = 500;

/// Quiet period before a burst of search keystrokes is applied
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSettings {
    pub batch_size: usize,
    pub load_more_throttle: Duration,
    pub search_debounce: Duration,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            load_more_throttle: Duration::from_millis(LOAD_MORE_THROTTLE_MS),
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
        }
    }
}

/// Prefix of `full` holding at most `display_count` items
pub fn visible_slice<T>(full: &[T], display_count: usize) -> &[T] {
    &full[..display_count.min(full.len())]
}

pub fn has_more(display_count: usize, total: usize) -> bool {
    display_count < total
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreOutcome {
    Grown { from: usize, to: usize },
    Throttled,
    Exhausted,
    /// A pending search settled first; the request targeted the old result
    Superseded,
}

/// Grows the query's window one batch at a time, ignoring requests that
/// arrive inside the throttle interval of the last accepted one.
#[derive(Debug, Clone)]
pub struct WindowController {
    throttle: Duration,
    last_accepted: Option<Instant>,
}

impl WindowController {
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle,
            last_accepted: None,
        }
    }

    pub fn load_more(&mut self, query: &mut QueryState, total: usize, now: Instant) -> LoadMoreOutcome {
        let current = query.display_count();
        if !has_more(current, total) {
            return LoadMoreOutcome::Exhausted;
        }

        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.throttle {
                tracing::debug!(display_count = current, "Load more throttled");
                return LoadMoreOutcome::Throttled;
            }
        }

        let grown = (current + query.batch_size()).min(total);
        query.set_display_count(grown);
        self.last_accepted = Some(now);

        tracing::debug!(from = current, to = grown, total, "Window grown");
        LoadMoreOutcome::Grown {
            from: current,
            to: grown,
        }
    }

    /// Forget the throttle history, used when the session is reset
    pub fn clear(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for WindowController {
    fn default() -> Self {
        Self::new(Duration::from_millis(LOAD_MORE_THROTTLE_MS))
    }
}
