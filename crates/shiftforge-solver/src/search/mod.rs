//! Depth-first search over copied spaces.
//!
//! Variable selection takes the first unfixed variable in the model's
//! branching order; values are tried smallest first. Every choice point
//! owns a copy of the space it branched from, so backtracking is a pop.

mod choice;

use tracing::{debug, trace};

use crate::model::Model;
use crate::stats::SearchStats;
use crate::store::{PropagationEngine, Space, VarId};
use crate::termination::{Termination, TerminationReason};

use choice::ChoicePoint;

/// Result of one search run.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Every variable is fixed and all constraints hold.
    Solution(Space),
    /// The tree was exhausted without a solution.
    Exhausted,
    /// A termination condition fired first.
    Aborted(TerminationReason),
}

/// Depth-first search with chronological backtracking.
///
/// Returns the first solution found. Two runs over the same model and
/// engine visit the same nodes in the same order.
#[derive(Debug)]
pub struct DepthFirstSearch<'m> {
    model: &'m Model,
    engine: &'m PropagationEngine,
}

impl<'m> DepthFirstSearch<'m> {
    pub fn new(model: &'m Model, engine: &'m PropagationEngine) -> Self {
        Self { model, engine }
    }

    /// Runs the search, stopping at the first solution.
    ///
    /// `stats` must already be started for time limits to apply.
    pub fn run<T: Termination>(&self, termination: &T, stats: &mut SearchStats) -> SearchOutcome {
        let order = self.model.branching_order();
        debug!(
            event = "search_start",
            variables = self.model.variable_count(),
            branching = order.len(),
            propagators = self.engine.propagator_count(),
        );

        let mut current = self.model.initial_space();
        match self.engine.propagate_all(&mut current) {
            Ok(runs) => {
                stats.record_propagations(runs);
                let fixed = order.iter().filter(|&&v| current.is_fixed(v)).count();
                debug!(event = "root_propagated", runs = runs, fixed = fixed);
            }
            Err(conflict) => {
                stats.record_failure();
                debug!(event = "root_conflict", conflict = ?conflict);
                return SearchOutcome::Exhausted;
            }
        }

        let mut stack: Vec<ChoicePoint> = Vec::new();
        let mut cursor = 0;

        loop {
            let Some((position, var)) = next_unfixed(&current, order, cursor) else {
                debug_assert!(current.is_assigned());
                return SearchOutcome::Solution(current);
            };
            stack.push(ChoicePoint::new(current, var, position));

            loop {
                if let Some(reason) = termination.check(stats) {
                    debug!(event = "search_aborted", reason = %reason, depth = stack.len());
                    return SearchOutcome::Aborted(reason);
                }
                let depth = stack.len();
                let Some(point) = stack.last_mut() else {
                    return SearchOutcome::Exhausted;
                };
                let Some(value) = point.next_value() else {
                    stack.pop();
                    stats.record_backtrack();
                    trace!(event = "backtrack", depth = depth);
                    continue;
                };

                let mut child = point.space.clone();
                stats.record_node(depth);
                trace!(event = "branch", depth = depth, var = %point.var, value = value);
                match self.engine.assign(&mut child, point.var, value) {
                    Ok(runs) => {
                        stats.record_propagations(runs);
                        cursor = point.cursor + 1;
                        current = child;
                        break;
                    }
                    Err(conflict) => {
                        stats.record_failure();
                        trace!(event = "conflict", depth = depth, conflict = ?conflict);
                    }
                }
            }
        }
    }
}

/// Finds the first unfixed variable at or after `cursor`.
///
/// Variables before `cursor` were fixed on the current path and stay fixed
/// in every descendant.
fn next_unfixed(space: &Space, order: &[VarId], cursor: usize) -> Option<(usize, VarId)> {
    order
        .iter()
        .enumerate()
        .skip(cursor)
        .find(|(_, &var)| !space.is_fixed(var))
        .map(|(position, &var)| (position, var))
}
