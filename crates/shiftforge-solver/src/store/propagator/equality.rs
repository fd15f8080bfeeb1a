//! Equality between two variables.

use super::{Propagation, PropagationContext, Propagator};
use crate::store::space::VarId;

/// `a == b`, enforced by intersecting the two domains.
#[derive(Debug, Clone)]
pub struct Equality {
    a: VarId,
    b: VarId,
}

impl Equality {
    pub fn new(a: VarId, b: VarId) -> Self {
        Self { a, b }
    }
}

impl Propagator for Equality {
    fn name(&self) -> &'static str {
        "Equality"
    }

    fn variables(&self) -> Vec<VarId> {
        vec![self.a, self.b]
    }

    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation {
        let a = ctx.domain(self.a).clone();
        ctx.intersect(self.b, &a)?;
        let b = ctx.domain(self.b).clone();
        ctx.intersect(self.a, &b)?;
        Ok(())
    }
}
