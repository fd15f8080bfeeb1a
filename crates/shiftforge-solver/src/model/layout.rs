//! Variable arrays of each model variant.

use crate::store::VarId;

/// Where the decision variables of a model live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// `slots[shift][slot]` holds the person in that slot.
    ShiftMajor { slots: Vec<Vec<VarId>> },

    /// `positions[person][shift]` holds the person's position in the shift;
    /// `occupants[shift][position]` holds the person at that position.
    PersonMajor {
        positions: Vec<Vec<VarId>>,
        occupants: Vec<Vec<VarId>>,
    },
}

impl Layout {
    /// Flattens the primary array.
    pub(crate) fn decisions(&self) -> Vec<VarId> {
        match self {
            Layout::ShiftMajor { slots } => slots.iter().flatten().copied().collect(),
            Layout::PersonMajor { positions, .. } => {
                positions.iter().flatten().copied().collect()
            }
        }
    }

    /// Variables search branches on before the remaining auxiliaries.
    ///
    /// Person-major models first choose who occupies each working position,
    /// shift by shift, then complete the rank array shift by shift. Idle
    /// ranks are left for last so a dead end never revisits them.
    pub(crate) fn leading_branch_vars(&self, shift_size: usize) -> Vec<VarId> {
        match self {
            Layout::ShiftMajor { slots } => slots.iter().flatten().copied().collect(),
            Layout::PersonMajor {
                positions,
                occupants,
            } => {
                let working = occupants
                    .iter()
                    .flat_map(|row| row.iter().take(shift_size).copied());
                let num_shifts = occupants.len();
                let ranks = (0..num_shifts)
                    .flat_map(|s| positions.iter().map(move |row| row[s]));
                working.chain(ranks).collect()
            }
        }
    }
}
