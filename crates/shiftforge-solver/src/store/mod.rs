//! Constraint store and propagation engine.
//!
//! - `Domain`: finite set of values of one variable
//! - `Space`: the domains of all variables at a search node
//! - `Constraint` / `ConstraintStore`: solver-neutral constraints
//! - `Propagator`: filtering algorithm compiled from a constraint
//! - `PropagationEngine`: queue-driven fixpoint over all propagators

mod constraint;
mod domain;
mod engine;
pub mod propagator;
mod space;

pub use constraint::{Constraint, ConstraintStore, Relation};
pub use domain::Domain;
pub use engine::PropagationEngine;
pub use propagator::{Conflict, Propagation, PropagationContext, Propagator};
pub use space::{Space, VarId};
