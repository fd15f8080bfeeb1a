//! Reading a roster back out of a solved space.

use std::collections::BTreeSet;
use std::time::Duration;

use shiftforge_core::{PersonId, Result, ShiftForgeError, ShiftIndex};

use crate::model::{Layout, Model};
use crate::stats::SearchStats;
use crate::store::{Space, VarId};
use crate::termination::TerminationReason;

/// Who works which shift.
///
/// Workers of a shift are listed in slot order (shift-major) or position
/// order (person-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    shifts: Vec<Vec<PersonId>>,
    person_shifts: Vec<BTreeSet<ShiftIndex>>,
}

impl Roster {
    pub fn num_shifts(&self) -> usize {
        self.shifts.len()
    }

    pub fn num_people(&self) -> usize {
        self.person_shifts.len()
    }

    /// Returns the people working `shift`, in slot order.
    pub fn workers(&self, shift: ShiftIndex) -> &[PersonId] {
        self.shifts.get(shift.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the shifts `person` works.
    pub fn shifts_of(&self, person: PersonId) -> Option<&BTreeSet<ShiftIndex>> {
        self.person_shifts.get(person.0)
    }

    pub fn works(&self, person: PersonId, shift: ShiftIndex) -> bool {
        self.shifts_of(person).is_some_and(|s| s.contains(&shift))
    }

    /// Iterates `(shift, slot, person)` in shift then slot order.
    pub fn assignments(&self) -> impl Iterator<Item = (ShiftIndex, usize, PersonId)> + '_ {
        self.shifts.iter().enumerate().flat_map(|(shift, workers)| {
            workers
                .iter()
                .enumerate()
                .map(move |(slot, &person)| (ShiftIndex(shift), slot, person))
        })
    }

    /// Builds the roster from a space where every variable is fixed.
    ///
    /// # Errors
    ///
    /// Returns `ShiftForgeError::Internal` if a variable is unfixed or the
    /// decision variables disagree with the `works` indicators.
    pub fn from_space(model: &Model, space: &Space) -> Result<Self> {
        let num_shifts = model.num_shifts();
        let shift_size = model.shift_size();

        let shifts: Vec<Vec<PersonId>> = match model.layout() {
            Layout::ShiftMajor { slots } => slots
                .iter()
                .map(|row| row.iter().map(|&v| fixed(model, space, v).map(PersonId)).collect())
                .collect::<Result<_>>()?,
            Layout::PersonMajor { occupants, .. } => occupants
                .iter()
                .map(|row| {
                    row.iter()
                        .take(shift_size)
                        .map(|&v| fixed(model, space, v).map(PersonId))
                        .collect()
                })
                .collect::<Result<_>>()?,
        };

        let mut person_shifts = vec![BTreeSet::new(); model.num_people()];
        for (shift, workers) in shifts.iter().enumerate() {
            for person in workers {
                let slot = person_shifts.get_mut(person.0).ok_or_else(|| {
                    ShiftForgeError::internal(format!("shift {} names unknown person {}", shift, person))
                })?;
                slot.insert(ShiftIndex(shift));
            }
        }

        for person in 0..model.num_people() {
            for shift in ShiftIndex::range(num_shifts) {
                let Some(var) = model.works_var(PersonId(person), shift) else {
                    continue;
                };
                let indicator = fixed(model, space, var)? == 1;
                if indicator != person_shifts[person].contains(&shift) {
                    return Err(ShiftForgeError::internal(format!(
                        "works({}, {}) disagrees with the decision variables",
                        person, shift
                    )));
                }
            }
        }

        Ok(Self {
            shifts,
            person_shifts,
        })
    }
}

fn fixed(model: &Model, space: &Space, var: VarId) -> Result<usize> {
    space.value(var).ok_or_else(|| {
        ShiftForgeError::internal(format!("{} is not fixed", model.variable_name(var)))
    })
}

/// How a solve ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved(Roster),
    /// The search exhausted the tree: no roster satisfies the rules.
    Infeasible,
    /// A budget or the cancel flag stopped search first.
    Aborted(TerminationReason),
}

impl SolveOutcome {
    /// Short outcome name for logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            SolveOutcome::Solved(_) => "solved",
            SolveOutcome::Infeasible => "infeasible",
            SolveOutcome::Aborted(TerminationReason::TimeLimit) => "time_limit",
            SolveOutcome::Aborted(TerminationReason::NodeLimit) => "node_limit",
            SolveOutcome::Aborted(TerminationReason::Cancelled) => "cancelled",
        }
    }
}

/// Result of one solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub outcome: SolveOutcome,
    /// Wall-clock time from model building to outcome.
    pub duration: Duration,
    pub stats: SearchStats,
}

impl SolveResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved(_))
    }

    pub fn roster(&self) -> Option<&Roster> {
        match &self.outcome {
            SolveOutcome::Solved(roster) => Some(roster),
            _ => None,
        }
    }

    /// Converts the outcome into the roster or the matching error.
    pub fn into_roster(self) -> Result<Roster> {
        match self.outcome {
            SolveOutcome::Solved(roster) => Ok(roster),
            SolveOutcome::Infeasible => Err(ShiftForgeError::Infeasible),
            SolveOutcome::Aborted(TerminationReason::Cancelled) => Err(ShiftForgeError::Cancelled),
            SolveOutcome::Aborted(_) => Err(ShiftForgeError::BudgetExhausted),
        }
    }
}
