//! Reified constraints defining the `works` indicators.

use super::{Propagation, PropagationContext, Propagator};
use crate::store::space::VarId;

/// `indicator == 1` iff `x < bound`.
#[derive(Debug, Clone)]
pub struct ReifiedThreshold {
    x: VarId,
    bound: usize,
    indicator: VarId,
}

impl ReifiedThreshold {
    pub fn new(x: VarId, bound: usize, indicator: VarId) -> Self {
        Self {
            x,
            bound,
            indicator,
        }
    }
}

impl Propagator for ReifiedThreshold {
    fn name(&self) -> &'static str {
        "ReifiedThreshold"
    }

    fn variables(&self) -> Vec<VarId> {
        vec![self.x, self.indicator]
    }

    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation {
        let domain = ctx.domain(self.x);
        let (min, max) = (domain.min(), domain.max());
        if max.is_some_and(|m| m < self.bound) {
            ctx.fix(self.indicator, 1)?;
        } else if min.is_some_and(|m| m >= self.bound) {
            ctx.fix(self.indicator, 0)?;
        }

        match ctx.value(self.indicator) {
            Some(1) => {
                ctx.retain_below(self.x, self.bound)?;
            }
            Some(_) => {
                ctx.retain_from(self.x, self.bound)?;
            }
            None => {}
        }
        Ok(())
    }
}

/// `indicator == 1` iff some source variable equals `value`.
///
/// Defines `works(person, shift)` in the shift-major model: the person works
/// if any slot of the shift holds them.
#[derive(Debug, Clone)]
pub struct ReifiedOr {
    sources: Vec<VarId>,
    value: usize,
    indicator: VarId,
}

impl ReifiedOr {
    pub fn new(sources: Vec<VarId>, value: usize, indicator: VarId) -> Self {
        Self {
            sources,
            value,
            indicator,
        }
    }
}

impl Propagator for ReifiedOr {
    fn name(&self) -> &'static str {
        "ReifiedOr"
    }

    fn variables(&self) -> Vec<VarId> {
        let mut vars = self.sources.clone();
        vars.push(self.indicator);
        vars
    }

    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation {
        let holds = self
            .sources
            .iter()
            .any(|&s| ctx.value(s) == Some(self.value));
        let mut candidates = self
            .sources
            .iter()
            .copied()
            .filter(|&s| ctx.contains(s, self.value));
        let first = candidates.next();
        let single = first.filter(|_| candidates.next().is_none());

        if holds {
            ctx.fix(self.indicator, 1)?;
        } else if first.is_none() {
            ctx.fix(self.indicator, 0)?;
        }

        match ctx.value(self.indicator) {
            Some(0) => {
                for &source in &self.sources {
                    ctx.remove(source, self.value)?;
                }
            }
            Some(_) if !holds => {
                if let Some(source) = single {
                    ctx.fix(source, self.value)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
