//! Solver-neutral constraint representation.
//!
//! The model builder posts `Constraint` values into a `ConstraintStore`.
//! The store knows nothing about people or shifts; it is compiled into
//! propagators once per solve.

use std::fmt;

use shiftforge_core::{Result, ShiftForgeError};

use super::propagator::{
    AllDifferent, Capacity, Channeling, Equality, LinearSum, Propagator, ReifiedOr,
    ReifiedThreshold,
};
use super::space::VarId;

/// Comparison between a sum of indicators and a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    /// `sum > k`
    Greater(usize),
    /// `sum < k`
    Less(usize),
    /// `sum == k`
    Equal(usize),
    /// `sum` is one of the listed counts.
    OneOf(Vec<usize>),
}

impl Relation {
    /// Returns true if `sum` satisfies the relation.
    pub fn holds(&self, sum: usize) -> bool {
        match self {
            Relation::Greater(k) => sum > *k,
            Relation::Less(k) => sum < *k,
            Relation::Equal(k) => sum == *k,
            Relation::OneOf(counts) => counts.contains(&sum),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Greater(k) => write!(f, "> {k}"),
            Relation::Less(k) => write!(f, "< {k}"),
            Relation::Equal(k) => write!(f, "== {k}"),
            Relation::OneOf(counts) => write!(f, "in {counts:?}"),
        }
    }
}

/// A constraint over model variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Pairwise distinct values, except that `except` may repeat.
    AllDifferent {
        vars: Vec<VarId>,
        except: Option<usize>,
    },

    /// `inverse[forward[i]] == i` and `forward[inverse[j]] == j`.
    Channeling {
        forward: Vec<VarId>,
        inverse: Vec<VarId>,
    },

    /// `indicator == 1` iff `x < bound`.
    ReifiedThreshold {
        x: VarId,
        bound: usize,
        indicator: VarId,
    },

    /// `indicator == 1` iff any source equals `value`.
    ReifiedOr {
        sources: Vec<VarId>,
        value: usize,
        indicator: VarId,
    },

    /// Sum of 0/1 variables compared to a constant.
    LinearSum { vars: Vec<VarId>, relation: Relation },

    /// `a == b`.
    Equality { a: VarId, b: VarId },

    /// Rows of 0/1 variables with at most `max_per_row` ones each, whose
    /// columns each need at least `demand` ones. Implied by row and column
    /// sums posted elsewhere.
    Capacity {
        rows: Vec<Vec<VarId>>,
        demand: usize,
        max_per_row: usize,
    },
}

impl Constraint {
    /// Short constraint name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::AllDifferent { .. } => "AllDifferent",
            Constraint::Channeling { .. } => "Channeling",
            Constraint::ReifiedThreshold { .. } => "ReifiedThreshold",
            Constraint::ReifiedOr { .. } => "ReifiedOr",
            Constraint::LinearSum { .. } => "LinearSum",
            Constraint::Equality { .. } => "Equality",
            Constraint::Capacity { .. } => "Capacity",
        }
    }

    /// Builds the propagator for this constraint.
    ///
    /// # Errors
    ///
    /// Returns `ShiftForgeError::Internal` for a channeling whose inverse
    /// array is longer than its forward array; no assignment could ever
    /// satisfy it, and the model builder never posts one.
    pub fn to_propagator(&self) -> Result<Box<dyn Propagator>> {
        let propagator: Box<dyn Propagator> = match self {
            Constraint::AllDifferent { vars, except } => match except {
                Some(value) => Box::new(AllDifferent::except(vars.clone(), *value)),
                None => Box::new(AllDifferent::new(vars.clone())),
            },
            Constraint::Channeling { forward, inverse } => {
                if inverse.len() > forward.len() {
                    return Err(ShiftForgeError::internal(format!(
                        "channeling inverse array has {} entries but forward array only {}",
                        inverse.len(),
                        forward.len()
                    )));
                }
                Box::new(Channeling::new(forward.clone(), inverse.clone()))
            }
            Constraint::ReifiedThreshold {
                x,
                bound,
                indicator,
            } => Box::new(ReifiedThreshold::new(*x, *bound, *indicator)),
            Constraint::ReifiedOr {
                sources,
                value,
                indicator,
            } => Box::new(ReifiedOr::new(sources.clone(), *value, *indicator)),
            Constraint::LinearSum { vars, relation } => {
                Box::new(LinearSum::new(vars.clone(), relation.clone()))
            }
            Constraint::Equality { a, b } => Box::new(Equality::new(*a, *b)),
            Constraint::Capacity {
                rows,
                demand,
                max_per_row,
            } => Box::new(Capacity::new(rows.clone(), *demand, *max_per_row)),
        };
        Ok(propagator)
    }
}

/// Ordered collection of posted constraints.
#[derive(Debug, Clone, Default)]
pub struct ConstraintStore {
    constraints: Vec<Constraint>,
}

impl ConstraintStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Counts constraints per kind, in first-posted order.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for constraint in &self.constraints {
            let kind = constraint.kind();
            match counts.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, n)) => *n += 1,
                None => counts.push((kind, 1)),
            }
        }
        counts
    }

    /// Builds one propagator per constraint.
    pub fn compile(&self) -> Result<Vec<Box<dyn Propagator>>> {
        self.constraints.iter().map(Constraint::to_propagator).collect()
    }
}
