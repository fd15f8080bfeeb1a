//! External termination via an `AtomicBool` flag.

use std::sync::atomic::{AtomicBool, Ordering};

use super::{Termination, TerminationReason};
use crate::stats::SearchStats;

/// Terminates when an external flag is set.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use shiftforge_solver::termination::{ExternalTermination, Termination};
/// use shiftforge_solver::SearchStats;
///
/// let flag = AtomicBool::new(false);
/// let term = ExternalTermination::new(&flag);
/// assert!(!term.is_terminated(&SearchStats::default()));
///
/// flag.store(true, Ordering::SeqCst);
/// assert!(term.is_terminated(&SearchStats::default()));
/// ```
#[derive(Debug)]
pub struct ExternalTermination<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination<'_> {
    fn check(&self, _stats: &SearchStats) -> Option<TerminationReason> {
        self.flag
            .load(Ordering::Relaxed)
            .then_some(TerminationReason::Cancelled)
    }
}
