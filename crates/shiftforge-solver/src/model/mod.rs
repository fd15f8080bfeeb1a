//! Roster model: variables and constraints for one solve.
//!
//! A `Model` is built once per solve from the roster and the configuration
//! and never changes afterwards. Search works on copies of its initial
//! `Space`.
//!
//! # Variables
//!
//! | Variant | Decision array | Domain | Auxiliary |
//! |---------|----------------|--------|-----------|
//! | ShiftMajor | `slot(shift, slot)` | `0..n` (person) | `works(person, shift)` |
//! | PersonMajorRanked | `position(person, shift)` | `0..n` (rank) | `occupant(shift, rank)`, `works` |
//! | PersonMajorThreshold | `position(person, shift)` | `0..=size` (`size` = idle) | `occupant(shift, position)`, `works` |
//!
//! `works(person, shift)` is the single definition of "working" used by
//! every rule: coverage, shift cap, friend pairing, availability and split
//! adjacency.

mod builder;
mod layout;

use shiftforge_config::{ModelVariant, ScheduleConfig};
use shiftforge_core::{Person, PersonId, Result, ShiftIndex};

use crate::store::{ConstraintStore, Domain, Space, VarId};

pub use builder::ModelBuilder;
pub use layout::Layout;

/// Variables, constraints and branching order for one solve.
#[derive(Debug, Clone)]
pub struct Model {
    variant: ModelVariant,
    num_people: usize,
    num_shifts: usize,
    shift_size: usize,
    names: Vec<String>,
    initial: Vec<Domain>,
    store: ConstraintStore,
    layout: Layout,
    works: Vec<Vec<VarId>>,
    decisions: Vec<VarId>,
    branching: Vec<VarId>,
}

impl Model {
    /// Validates the configuration against the roster and builds the model.
    ///
    /// # Errors
    ///
    /// Returns `ShiftForgeError::Config` for invalid configurations; no
    /// variable is created in that case.
    pub fn build(people: &[Person], config: &ScheduleConfig) -> Result<Self> {
        ModelBuilder::new(people, config).build()
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn num_people(&self) -> usize {
        self.num_people
    }

    pub fn num_shifts(&self) -> usize {
        self.num_shifts
    }

    pub fn shift_size(&self) -> usize {
        self.shift_size
    }

    pub fn variable_count(&self) -> usize {
        self.initial.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.store.len()
    }

    pub fn constraints(&self) -> &ConstraintStore {
        &self.store
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the name given to a variable at creation.
    pub fn variable_name(&self, var: VarId) -> &str {
        &self.names[var.0]
    }

    /// Returns the domain a variable starts search with.
    pub fn initial_domain(&self, var: VarId) -> &Domain {
        &self.initial[var.0]
    }

    /// Returns a fresh copy of the root search state.
    pub fn initial_space(&self) -> Space {
        Space::new(self.initial.clone())
    }

    /// Returns the `works(person, shift)` indicator.
    pub fn works_var(&self, person: PersonId, shift: ShiftIndex) -> Option<VarId> {
        self.works.get(person.0)?.get(shift.0).copied()
    }

    /// The primary decision array, flattened: `(shift, slot)` for the
    /// shift-major variant and `(person, shift)` for person-major variants.
    pub fn decision_variables(&self) -> &[VarId] {
        &self.decisions
    }

    /// Every variable in the order search branches on them.
    ///
    /// For shift-major this starts with `decision_variables()`. Person-major
    /// variants deliberately differ: they branch first on the working
    /// occupants by `(shift, position)`, then on the `(person, shift)`
    /// positions ordered by shift, and only then on the rest.
    pub fn branching_order(&self) -> &[VarId] {
        &self.branching
    }
}

#[cfg(test)]
mod tests;
