//! Time-based termination.

use std::time::Duration;

use super::{Termination, TerminationReason};
use crate::stats::SearchStats;

/// Terminates once the search has run for `limit`.
///
/// # Example
///
/// ```
/// use shiftforge_solver::termination::TimeTermination;
///
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl Termination for TimeTermination {
    fn check(&self, stats: &SearchStats) -> Option<TerminationReason> {
        (stats.elapsed() >= self.limit).then_some(TerminationReason::TimeLimit)
    }
}
