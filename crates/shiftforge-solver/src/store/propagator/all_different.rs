//! All-different over a row of variables.

use super::{Conflict, Propagation, PropagationContext, Propagator};
use crate::store::domain::Domain;
use crate::store::space::VarId;

/// No two variables take the same value.
///
/// An optional `except` value may be shared by any number of variables; it
/// marks "not working" in the threshold model. Pruning is value
/// elimination: a fixed value is removed from every other domain, repeated
/// until no new variable gets fixed. A pigeonhole check fails early when the
/// variables that must take a distinct value have fewer values than members.
#[derive(Debug, Clone)]
pub struct AllDifferent {
    vars: Vec<VarId>,
    except: Option<usize>,
}

impl AllDifferent {
    pub fn new(vars: Vec<VarId>) -> Self {
        Self { vars, except: None }
    }

    /// All-different that tolerates ties at `except`.
    pub fn except(vars: Vec<VarId>, except: usize) -> Self {
        Self {
            vars,
            except: Some(except),
        }
    }

    fn shares(&self, value: usize) -> bool {
        self.except == Some(value)
    }
}

impl Propagator for AllDifferent {
    fn name(&self) -> &'static str {
        "AllDifferent"
    }

    fn variables(&self) -> Vec<VarId> {
        self.vars.clone()
    }

    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation {
        let mut done = vec![false; self.vars.len()];
        let mut progress = true;
        while progress {
            progress = false;
            for (i, &var) in self.vars.iter().enumerate() {
                if done[i] {
                    continue;
                }
                let Some(value) = ctx.value(var) else {
                    continue;
                };
                done[i] = true;
                if self.shares(value) {
                    continue;
                }
                for (j, &other) in self.vars.iter().enumerate() {
                    if i != j && ctx.remove(other, value)? {
                        progress = true;
                    }
                }
            }
        }

        // Pigeonhole: members that cannot take the shared value need
        // pairwise distinct values.
        let mut union = Domain::empty();
        let mut strict = 0;
        for &var in &self.vars {
            let domain = ctx.domain(var);
            if self.except.is_some_and(|e| domain.contains(e)) {
                continue;
            }
            strict += 1;
            union.union_with(domain);
        }
        if let Some(except) = self.except {
            union.remove(except);
        }
        if union.size() < strict {
            return Err(Conflict::Unsatisfiable("AllDifferent"));
        }
        Ok(())
    }
}
