//! ShiftForge solver
//!
//! Turns a roster of people and a schedule configuration into a
//! finite-domain constraint model and searches it depth-first:
//! - `store`: domains, constraints, propagators and the fixpoint engine
//! - `model`: the roster model in its three variable layouts
//! - `search`: depth-first search with copied spaces
//! - `termination`: time, node and cancel-flag limits
//! - `extract`: the solved roster and solve outcome

pub mod extract;
pub mod model;
pub mod search;
pub mod solver;
pub mod stats;
pub mod store;
pub mod termination;

pub use extract::{Roster, SolveOutcome, SolveResult};
pub use model::{Layout, Model, ModelBuilder};
pub use search::{DepthFirstSearch, SearchOutcome};
pub use solver::{solve, Solver};
pub use stats::SearchStats;
pub use store::{Constraint, ConstraintStore, Domain, PropagationEngine, Relation, Space, VarId};
pub use termination::{Termination, TerminationReason};
