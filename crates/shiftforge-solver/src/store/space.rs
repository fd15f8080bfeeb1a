//! Variable identifiers and the mutable search state.

use std::fmt;

use super::domain::Domain;

/// Index of a variable in a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// The current domain of every variable.
///
/// A space is the only state that changes during search. Choice points keep
/// their own copy, so backtracking is restoring a saved space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    domains: Vec<Domain>,
}

impl Space {
    pub fn new(domains: Vec<Domain>) -> Self {
        Self { domains }
    }

    pub fn domain(&self, var: VarId) -> &Domain {
        &self.domains[var.0]
    }

    pub fn value(&self, var: VarId) -> Option<usize> {
        self.domains[var.0].value()
    }

    pub fn is_fixed(&self, var: VarId) -> bool {
        self.domains[var.0].is_fixed()
    }

    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    /// Returns true once every variable holds a single value.
    pub fn is_assigned(&self) -> bool {
        self.domains.iter().all(Domain::is_fixed)
    }

    pub(crate) fn domains_mut(&mut self) -> &mut [Domain] {
        &mut self.domains
    }
}
