//! Sliding-window request budget for upstream calls.
//!
//! The provider's free tier allows roughly 10,000 calls per month, so the
//! client budgets 333 calls per trailing 24 hours to stay under it. The
//! log of request timestamps is pruned lazily on each budget check; a
//! read-only status query may transiently count entries that the next
//! check will drop.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::debug;

/// Upstream calls allowed per trailing window.
pub const MAX_REQUESTS_PER_WINDOW: u32 = 333;

/// Length of the trailing window.
pub const WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Snapshot of the current request budget.
#[derive(Clone, Debug)]
pub struct QuotaStatus {
    /// Upstream calls still available in the current window.
    pub remaining: u32,

    /// Configured maximum per window.
    pub total: u32,

    /// Earliest time `remaining` can increase: when the oldest in-window
    /// request leaves the window. Now when no requests are logged.
    pub window_reset: DateTime<Utc>,
}

/// Ordered log of upstream request timestamps within a sliding window.
#[derive(Debug)]
pub(crate) struct RequestBudget {
    log: Vec<Instant>,
    max: u32,
    window: Duration,
}

impl RequestBudget {
    pub(crate) fn new(max: u32, window: Duration) -> Self {
        Self {
            log: Vec::new(),
            max,
            window,
        }
    }

    /// Prune entries that left the window, then report whether another
    /// upstream call fits the budget.
    pub(crate) fn check(&mut self) -> bool {
        let now = Instant::now();
        self.prune(now);
        let used = self.log.len() as u32;
        if used >= self.max {
            debug!("request budget exhausted: {}/{} in window", used, self.max);
            return false;
        }
        true
    }

    /// Record one upstream call at the current instant.
    pub(crate) fn record(&mut self) {
        self.log.push(Instant::now());
        debug!(
            "recorded upstream request, {}/{} in window",
            self.log.len(),
            self.max
        );
    }

    /// Read-only budget snapshot. Does not prune; stale entries are
    /// dropped by the next `check`.
    pub(crate) fn status(&self) -> QuotaStatus {
        let now = Instant::now();
        let mut used: u32 = 0;
        let mut oldest: Option<Instant> = None;

        for &at in &self.log {
            if now.duration_since(at) < self.window {
                used += 1;
                oldest = Some(match oldest {
                    Some(current) if current <= at => current,
                    _ => at,
                });
            }
        }

        let reset_in = oldest
            .map(|at| self.window.saturating_sub(now.duration_since(at)))
            .unwrap_or(Duration::ZERO);
        let reset_in =
            chrono::Duration::from_std(reset_in).unwrap_or_else(|_| chrono::Duration::zero());

        QuotaStatus {
            remaining: self.max.saturating_sub(used),
            total: self.max,
            window_reset: Utc::now() + reset_in,
        }
    }

    fn prune(&mut self, now: Instant) {
        let window = self.window;
        self.log.retain(|&at| now.duration_since(at) < window);
    }
}
