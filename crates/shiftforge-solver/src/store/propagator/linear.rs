//! Sums of 0/1 indicators compared to a constant.

use smallvec::SmallVec;

use super::{Conflict, Propagation, PropagationContext, Propagator};
use crate::store::constraint::Relation;
use crate::store::space::VarId;

/// `sum(vars) <relation>` over 0/1 variables.
///
/// Bounds reasoning: `lo` counts indicators fixed to 1 and `hi` adds the
/// unfixed ones. When the relation only admits `lo`, every unfixed indicator
/// is set to 0; when it only admits `hi`, every unfixed indicator is set
/// to 1.
#[derive(Debug, Clone)]
pub struct LinearSum {
    vars: Vec<VarId>,
    relation: Relation,
}

impl LinearSum {
    pub fn new(vars: Vec<VarId>, relation: Relation) -> Self {
        Self { vars, relation }
    }

    /// Smallest and largest admissible sums within `lo..=hi`.
    fn admissible(&self, lo: usize, hi: usize) -> Option<(usize, usize)> {
        match &self.relation {
            Relation::Greater(k) => (hi > *k).then(|| (lo.max(k + 1), hi)),
            Relation::Less(k) => (*k > 0 && lo < *k).then(|| (lo, hi.min(k - 1))),
            Relation::Equal(k) => (lo..=hi).contains(k).then_some((*k, *k)),
            Relation::OneOf(counts) => {
                let mut feasible = counts.iter().copied().filter(|c| (lo..=hi).contains(c));
                let first = feasible.next()?;
                let (min, max) = feasible.fold((first, first), |(a, b), c| (a.min(c), b.max(c)));
                Some((min, max))
            }
        }
    }
}

impl Propagator for LinearSum {
    fn name(&self) -> &'static str {
        "LinearSum"
    }

    fn variables(&self) -> Vec<VarId> {
        self.vars.clone()
    }

    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation {
        let mut lo = 0;
        let mut open: SmallVec<[VarId; 16]> = SmallVec::new();
        for &var in &self.vars {
            match ctx.value(var) {
                Some(0) => {}
                Some(_) => lo += 1,
                None => open.push(var),
            }
        }
        let hi = lo + open.len();

        let (min, max) = self
            .admissible(lo, hi)
            .ok_or(Conflict::Unsatisfiable("LinearSum"))?;
        if open.is_empty() {
            return Ok(());
        }
        if max == lo {
            for &var in &open {
                ctx.fix(var, 0)?;
            }
        } else if min == hi {
            for &var in &open {
                ctx.fix(var, 1)?;
            }
        }
        Ok(())
    }
}
