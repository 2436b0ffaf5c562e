use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct PendingSearch {
    query: String,
    last_input: Instant,
}

/// Coalesces bursts of search input into one applied query.
///
/// Each `input` restarts the quiet period. `settle` hands back the latest
/// input once no new input has arrived for the whole quiet period.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    quiet_period: Duration,
    pending: Option<PendingSearch>,
}

impl SearchDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    pub fn input(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some(PendingSearch {
            query: query.into(),
            last_input: now,
        });
    }

    pub fn settle(&mut self, now: Instant) -> Option<String> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.last_input) >= self.quiet_period);

        if ready {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
