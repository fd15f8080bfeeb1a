//! Fixpoint propagation.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::domain::Domain;
use super::propagator::{Conflict, Propagation, PropagationContext, Propagator};
use super::space::{Space, VarId};

/// Runs propagators until no domain changes.
///
/// Each variable keeps the list of propagators watching it. After a
/// propagator shrinks a domain, every watcher of that variable is queued
/// again, the propagator itself included.
#[derive(Debug)]
pub struct PropagationEngine {
    propagators: Vec<Box<dyn Propagator>>,
    watchers: Vec<SmallVec<[usize; 8]>>,
}

impl PropagationEngine {
    pub fn new(variable_count: usize, propagators: Vec<Box<dyn Propagator>>) -> Self {
        let mut watchers: Vec<SmallVec<[usize; 8]>> = vec![SmallVec::new(); variable_count];
        for (index, propagator) in propagators.iter().enumerate() {
            for var in propagator.variables() {
                let list = &mut watchers[var.0];
                if !list.contains(&index) {
                    list.push(index);
                }
            }
        }
        Self {
            propagators,
            watchers,
        }
    }

    pub fn propagator_count(&self) -> usize {
        self.propagators.len()
    }

    /// Runs every propagator to a fixpoint. Used at the root node.
    ///
    /// Returns the number of propagator runs.
    pub fn propagate_all(&self, space: &mut Space) -> Propagation<u64> {
        let queue: VecDeque<usize> = (0..self.propagators.len()).collect();
        self.run(space.domains_mut(), queue)
    }

    /// Fixes `var` to `value` and propagates the consequences.
    ///
    /// Returns the number of propagator runs.
    pub fn assign(&self, space: &mut Space, var: VarId, value: usize) -> Propagation<u64> {
        let domains = space.domains_mut();
        let domain: &mut Domain = &mut domains[var.0];
        domain.fix(value);
        if domain.is_empty() {
            return Err(Conflict::EmptyDomain(var));
        }
        let queue: VecDeque<usize> = self.watchers[var.0].iter().copied().collect();
        self.run(domains, queue)
    }

    fn run(&self, domains: &mut [Domain], mut queue: VecDeque<usize>) -> Propagation<u64> {
        let mut queued = vec![false; self.propagators.len()];
        for &index in &queue {
            queued[index] = true;
        }
        let mut modified = Vec::new();
        let mut runs = 0;

        while let Some(index) = queue.pop_front() {
            queued[index] = false;
            runs += 1;
            {
                let mut ctx = PropagationContext::new(domains, &mut modified);
                self.propagators[index].propagate(&mut ctx)?;
            }
            for var in modified.drain(..) {
                for &watcher in &self.watchers[var.0] {
                    if !queued[watcher] {
                        queued[watcher] = true;
                        queue.push_back(watcher);
                    }
                }
            }
        }
        Ok(runs)
    }
}
