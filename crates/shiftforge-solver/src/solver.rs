//! Solve entry point.

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use shiftforge_config::ScheduleConfig;
use shiftforge_core::{Person, Result};
use tracing::info;

use crate::extract::{Roster, SolveOutcome, SolveResult};
use crate::model::Model;
use crate::search::{DepthFirstSearch, SearchOutcome};
use crate::stats::SearchStats;
use crate::store::PropagationEngine;
use crate::termination::{
    ExternalTermination, NodeCountTermination, OrTermination, TimeTermination,
};

/// Builds the model for a roster and searches it for the first valid
/// roster.
///
/// # Example
///
/// ```
/// use shiftforge_config::ScheduleConfig;
/// use shiftforge_core::Person;
/// use shiftforge_solver::Solver;
///
/// let people = vec![
///     Person::new(0, "Ada").with_veteran(true).available_on([0]),
///     Person::new(1, "Brook").available_on([0]),
/// ];
/// let config = ScheduleConfig::new().with_num_shifts(1);
///
/// let roster = Solver::new(config).solve(&people).unwrap().into_roster().unwrap();
/// assert_eq!(roster.workers(0.into()).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'t> {
    config: ScheduleConfig,
    terminate: Option<&'t AtomicBool>,
}

impl Solver<'static> {
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            terminate: None,
        }
    }
}

impl<'t> Solver<'t> {
    /// Stops the search once `flag` is set.
    pub fn with_terminate<'a>(self, flag: &'a AtomicBool) -> Solver<'a> {
        Solver {
            config: self.config,
            terminate: Some(flag),
        }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Solves the roster.
    ///
    /// Infeasibility and budget exhaustion are outcomes, not errors.
    ///
    /// # Errors
    ///
    /// Returns `ShiftForgeError::Config` for invalid configurations and
    /// `ShiftForgeError::Internal` if the solved space fails its
    /// consistency checks.
    pub fn solve(&self, people: &[Person]) -> Result<SolveResult> {
        let started = Instant::now();
        let model = Model::build(people, &self.config)?;
        let engine = PropagationEngine::new(model.variable_count(), model.constraints().compile()?);

        info!(
            event = "solve_start",
            people = people.len(),
            shifts = self.config.num_shifts,
            shift_size = self.config.shift_size,
            variant = %self.config.model_variant,
            variables = model.variable_count(),
            constraints = model.constraint_count(),
        );

        let termination = OrTermination((
            self.config.time_limit().map(TimeTermination::new),
            self.config.node_limit().map(NodeCountTermination::new),
            self.terminate.map(ExternalTermination::new),
        ));
        let mut stats = SearchStats::default();
        stats.start();

        let outcome = match DepthFirstSearch::new(&model, &engine).run(&termination, &mut stats) {
            SearchOutcome::Solution(space) => SolveOutcome::Solved(Roster::from_space(&model, &space)?),
            SearchOutcome::Exhausted => SolveOutcome::Infeasible,
            SearchOutcome::Aborted(reason) => SolveOutcome::Aborted(reason),
        };
        let duration = started.elapsed();

        info!(
            event = "solve_end",
            outcome = outcome.label(),
            duration_ms = duration.as_millis() as u64,
            nodes = stats.nodes,
            failures = stats.failures,
            backtracks = stats.backtracks,
            propagations = stats.propagations,
            node_speed = stats.nodes_per_second() as u64,
        );

        Ok(SolveResult {
            outcome,
            duration,
            stats,
        })
    }
}

/// Solves `people` under `config` without an external cancel flag.
pub fn solve(people: &[Person], config: &ScheduleConfig) -> Result<SolveResult> {
    Solver::new(config.clone()).solve(people)
}
