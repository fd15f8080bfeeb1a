//! Remaining row capacity against unmet column demand.

use smallvec::SmallVec;

use super::{Conflict, Propagation, PropagationContext, Propagator};
use crate::store::space::VarId;

/// A 0/1 matrix where each row holds at most `max_per_row` ones and each
/// column needs at least `demand` ones.
///
/// Rows are people and columns are shifts. The row and column sums are
/// already posted separately; this only checks them together. A column
/// short of `demand` can only be filled from its unfixed cells, and a row
/// fills at most one cell per column, so the open capacity left in the
/// short columns has to cover their total shortfall. All rows have the
/// same length.
#[derive(Debug, Clone)]
pub struct Capacity {
    rows: Vec<Vec<VarId>>,
    demand: usize,
    max_per_row: usize,
}

impl Capacity {
    pub fn new(rows: Vec<Vec<VarId>>, demand: usize, max_per_row: usize) -> Self {
        Self {
            rows,
            demand,
            max_per_row,
        }
    }
}

impl Propagator for Capacity {
    fn name(&self) -> &'static str {
        "Capacity"
    }

    fn variables(&self) -> Vec<VarId> {
        self.rows.iter().flatten().copied().collect()
    }

    fn propagate(&self, ctx: &mut PropagationContext<'_>) -> Propagation {
        let columns = self.rows.first().map_or(0, Vec::len);
        let mut short: SmallVec<[bool; 16]> = SmallVec::with_capacity(columns);
        let mut shortfall = 0;
        for column in 0..columns {
            let covered = self
                .rows
                .iter()
                .filter(|row| ctx.value(row[column]) == Some(1))
                .count();
            let missing = self.demand.saturating_sub(covered);
            short.push(missing > 0);
            shortfall += missing;
        }
        if shortfall == 0 {
            return Ok(());
        }

        let mut supply = 0;
        for row in &self.rows {
            let worked = row.iter().filter(|&&v| ctx.value(v) == Some(1)).count();
            let open = row
                .iter()
                .zip(&short)
                .filter(|&(&v, &is_short)| is_short && ctx.value(v).is_none())
                .count();
            supply += self.max_per_row.saturating_sub(worked).min(open);
        }

        if supply < shortfall {
            return Err(Conflict::Unsatisfiable("Capacity"));
        }
        Ok(())
    }
}
