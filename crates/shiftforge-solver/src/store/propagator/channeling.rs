//! Channeling between a person→position array and its inverse.

use smallvec::SmallVec;

use super::{Propagation, PropagationContext, Propagator};
use crate::store::space::VarId;

/// Links `forward[i] == j` with `inverse[j] == i`.
///
/// `forward` values at or above `inverse.len()` have no inverse entry; in
/// the threshold model they mean "not working". Every inverse entry must be
/// matched by a forward variable, so every working position is staffed.
#[derive(Debug, Clone)]
pub struct Channeling {
    forward: Vec<VarId>,
    inverse: Vec<VarId>,
}

impl Channeling {
    /// Creates the constraint. The inverse array can't be longer than the
    /// forward array; callers check this before building propagators.
    pub fn new(forward: Vec<VarId>, inverse: Vec<VarId>) -> Self {
        Self { forward, inverse }
    }

    fn forward_pass(&self, ctx: &mut PropagationContext<'_>) -> Propagation<bool> {
        let mut changed = false;
        for (i, &x) in self.forward.iter().enumerate() {
            let positions: SmallVec<[usize; 16]> = ctx
                .domain(x)
                .iter()
                .take_while(|&j| j < self.inverse.len())
                .collect();
            for j in positions {
                if !ctx.contains(self.inverse[j], i) {
                    changed |= ctx.remove(x, j)?;
                }
            }
            if let Some(j) = ctx.value(x) {
                if j < self.inverse.len() {
                    changed |= ctx.fix(self.inverse[j], i)?;
                }
            }
        }
        Ok(changed)
    }

    fn inverse_pass(&self, ctx: &mut PropagationContext<'_>) -> Propagation<bool> {
        let mut changed = false;
        for (j, &y) in self.inverse.iter().enumerate() {
            let owners: SmallVec<[usize; 16]> = ctx.domain(y).iter().collect();
            for i in owners {
                let consistent = self
                    .forward
                    .get(i)
                    .is_some_and(|&x| ctx.contains(x, j));
                if !consistent {
                    changed |= ctx.remove(y, i)?;
                }
            }
            if let Some(i) = ctx.value(y) {
                changed |= ctx.fix(self.forward[i], j)?;
            }
        }
        Ok(changed)
    }
}

impl Propagator for Channeling {
    fn name(&self) -> &'static str {
        "Channeling"
    }

    fn variables(&self) -> Vec<VarId> {
        self.forward.iter().chain(&self.inverse).copied().collect()
    }

    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation {
        loop {
            let forward = self.forward_pass(ctx)?;
            let inverse = self.inverse_pass(ctx)?;
            if !forward && !inverse {
                return Ok(());
            }
        }
    }
}
