//! Choice points of the depth-first search.

use smallvec::SmallVec;

use crate::store::{Space, VarId};

/// A branching variable together with the state before branching.
///
/// Children are copies of `space` with `var` fixed to the next untried
/// value; backtracking drops the copy and resumes here.
#[derive(Debug)]
pub(crate) struct ChoicePoint {
    pub(crate) space: Space,
    pub(crate) var: VarId,
    /// Index of `var` in the branching order.
    pub(crate) cursor: usize,
    values: SmallVec<[usize; 16]>,
    next: usize,
}

impl ChoicePoint {
    /// Values are tried in ascending order.
    pub(crate) fn new(space: Space, var: VarId, cursor: usize) -> Self {
        let values = space.domain(var).iter().collect();
        Self {
            space,
            var,
            cursor,
            values,
            next: 0,
        }
    }

    /// Returns the next untried value.
    pub(crate) fn next_value(&mut self) -> Option<usize> {
        let value = self.values.get(self.next).copied()?;
        self.next += 1;
        Some(value)
    }
}
