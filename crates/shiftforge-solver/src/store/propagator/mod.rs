//! Propagators for the global and linear constraints.
//!
//! A propagator removes values that cannot take part in any solution of its
//! constraint. Every propagator at least performs forward checking: once its
//! variables are fixed it detects violation, and it prunes values made
//! impossible by fixed variables.

mod all_different;
mod capacity;
mod channeling;
mod equality;
mod linear;
mod reified;

use std::fmt::Debug;

use super::domain::Domain;
use super::space::VarId;

pub use all_different::AllDifferent;
pub use capacity::Capacity;
pub use channeling::Channeling;
pub use equality::Equality;
pub use linear::LinearSum;
pub use reified::{ReifiedOr, ReifiedThreshold};

/// Why propagation stopped at a dead end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// A variable lost its last value.
    EmptyDomain(VarId),
    /// A constraint can no longer be satisfied.
    Unsatisfiable(&'static str),
}

/// Outcome of a pruning step.
pub type Propagation<T = ()> = Result<T, Conflict>;

/// Filtering algorithm attached to one constraint.
pub trait Propagator: Send + Sync + Debug {
    /// Short constraint name for logs.
    fn name(&self) -> &'static str;

    /// Variables whose changes wake this propagator.
    fn variables(&self) -> Vec<VarId>;

    /// Prunes domains through the context.
    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation;
}

/// Mutable view of the domains handed to a propagator.
///
/// Records every variable whose domain shrinks so the engine can wake the
/// propagators watching it, and turns an emptied domain into a `Conflict`.
pub struct PropagationContext<'a> {
    domains: &'a mut [Domain],
    modified: &'a mut Vec<VarId>,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(domains: &'a mut [Domain], modified: &'a mut Vec<VarId>) -> Self {
        Self { domains, modified }
    }

    pub fn domain(&self, var: VarId) -> &Domain {
        &self.domains[var.0]
    }

    pub fn value(&self, var: VarId) -> Option<usize> {
        self.domains[var.0].value()
    }

    pub fn contains(&self, var: VarId, value: usize) -> bool {
        self.domains[var.0].contains(value)
    }

    fn changed(&mut self, var: VarId, changed: bool) -> Propagation<bool> {
        if self.domains[var.0].is_empty() {
            return Err(Conflict::EmptyDomain(var));
        }
        if changed {
            self.modified.push(var);
        }
        Ok(changed)
    }

    /// Removes `value` from `var`.
    pub fn remove(&mut self, var: VarId, value: usize) -> Propagation<bool> {
        let changed = self.domains[var.0].remove(value);
        self.changed(var, changed)
    }

    /// Fixes `var` to `value`.
    pub fn fix(&mut self, var: VarId, value: usize) -> Propagation<bool> {
        let changed = self.domains[var.0].fix(value);
        self.changed(var, changed)
    }

    /// Keeps the values of `var` strictly below `bound`.
    pub fn retain_below(&mut self, var: VarId, bound: usize) -> Propagation<bool> {
        let changed = self.domains[var.0].retain_below(bound);
        self.changed(var, changed)
    }

    /// Keeps the values of `var` at or above `bound`.
    pub fn retain_from(&mut self, var: VarId, bound: usize) -> Propagation<bool> {
        let changed = self.domains[var.0].retain_from(bound);
        self.changed(var, changed)
    }

    /// Intersects the domain of `var` with `other`.
    pub fn intersect(&mut self, var: VarId, other: &Domain) -> Propagation<bool> {
        let changed = self.domains[var.0].intersect(other);
        self.changed(var, changed)
    }
}

#[cfg(test)]
mod tests;
