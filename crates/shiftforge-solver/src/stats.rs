//! Search statistics.

use std::time::{Duration, Instant};

/// Counters for one search run.
///
/// # Example
///
/// ```
/// use shiftforge_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node(1);
/// stats.record_node(2);
/// stats.record_failure();
/// stats.record_backtrack();
///
/// assert_eq!(stats.nodes, 2);
/// assert_eq!(stats.max_depth, 2);
/// assert_eq!(stats.failures, 1);
/// assert_eq!(stats.backtracks, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Children opened by assigning a value at a choice point.
    pub nodes: u64,
    /// Nodes whose propagation emptied a domain or violated a constraint.
    pub failures: u64,
    /// Choice points abandoned after every value failed.
    pub backtracks: u64,
    /// Propagator runs, root propagation included.
    pub propagations: u64,
    /// Deepest choice-point stack seen.
    pub max_depth: usize,
}

impl SearchStats {
    /// Marks the start of searching.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since searching started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn record_propagations(&mut self, runs: u64) {
        self.propagations += runs;
    }

    /// Returns the node rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes as f64 / secs
        } else {
            0.0
        }
    }
}
