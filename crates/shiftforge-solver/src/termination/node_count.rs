//! Node-budget termination.

use super::{Termination, TerminationReason};
use crate::stats::SearchStats;

/// Terminates once `limit` search nodes have been opened.
#[derive(Debug, Clone)]
pub struct NodeCountTermination {
    limit: u64,
}

impl NodeCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for NodeCountTermination {
    fn check(&self, stats: &SearchStats) -> Option<TerminationReason> {
        (stats.nodes >= self.limit).then_some(TerminationReason::NodeLimit)
    }
}
