//! Termination conditions for the search.
//!
//! A condition is checked before every node the search opens. When it
//! fires, search stops and reports the reason; a roster found earlier is
//! never discarded because the search returns at the first roster.

mod composite;
mod external;
mod node_count;
mod time;

use std::fmt::{self, Debug};

use crate::stats::SearchStats;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use node_count::NodeCountTermination;
pub use time::TimeTermination;

/// Why the search stopped before exhausting the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    TimeLimit,
    NodeLimit,
    Cancelled,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::TimeLimit => write!(f, "time limit"),
            TerminationReason::NodeLimit => write!(f, "node limit"),
            TerminationReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Trait for deciding when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns the reason to stop, or `None` to keep going.
    fn check(&self, stats: &SearchStats) -> Option<TerminationReason>;

    /// Returns true if search should stop.
    fn is_terminated(&self, stats: &SearchStats) -> bool {
        self.check(stats).is_some()
    }
}

/// An absent condition never fires.
impl<T: Termination> Termination for Option<T> {
    fn check(&self, stats: &SearchStats) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(stats))
    }
}

/// Never terminates; the search runs until it finds a roster or exhausts
/// the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTermination;

impl Termination for NeverTermination {
    fn check(&self, _stats: &SearchStats) -> Option<TerminationReason> {
        None
    }
}
