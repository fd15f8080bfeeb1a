//! Translates a roster and a configuration into a `Model`.

use std::collections::BTreeSet;

use shiftforge_config::{ModelVariant, ScheduleConfig, ShiftCap};
use shiftforge_core::{Person, PersonId, Result, ShiftForgeError, ShiftIndex};
use tracing::{debug, warn};

use super::{Layout, Model};
use crate::store::{Constraint, ConstraintStore, Domain, Relation, VarId};

/// Builds a `Model` step by step.
///
/// Validation runs before any variable is created. Constraints are posted
/// in a fixed order (linking, staffing, coverage, shift cap, capacity,
/// friend groups, split adjacency) so two builds of the same input are
/// identical.
pub struct ModelBuilder<'a> {
    people: &'a [Person],
    config: &'a ScheduleConfig,
    names: Vec<String>,
    domains: Vec<Domain>,
    store: ConstraintStore,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(people: &'a [Person], config: &'a ScheduleConfig) -> Self {
        Self {
            people,
            config,
            names: Vec::new(),
            domains: Vec::new(),
            store: ConstraintStore::new(),
        }
    }

    pub fn build(mut self) -> Result<Model> {
        self.validate()?;

        let num_people = self.people.len();
        let num_shifts = self.config.num_shifts;
        let shift_size = self.config.shift_size;
        let variant = self.config.model_variant;

        let works = self.works_indicators();
        let layout = match variant {
            ModelVariant::ShiftMajor => self.shift_major(&works),
            ModelVariant::PersonMajorRanked => self.person_major(&works, false),
            ModelVariant::PersonMajorThreshold => self.person_major(&works, true),
        };

        self.post_staffing(&works);
        if self.config.enforce_veteran_coverage {
            self.post_veteran_coverage(&works);
        }
        self.post_shift_cap(&works);
        self.post_capacity(&works);
        self.post_friend_groups(&works);
        if self.config.enforce_split_adjacency {
            self.post_split_adjacency(&works);
        }

        let decisions = layout.decisions();
        let mut branching = layout.leading_branch_vars(shift_size);
        let mut seen = vec![false; self.domains.len()];
        for var in &branching {
            seen[var.0] = true;
        }
        branching.extend((0..self.domains.len()).filter(|&i| !seen[i]).map(VarId));

        debug!(
            event = "model_built",
            variant = %variant,
            people = num_people,
            shifts = num_shifts,
            shift_size = shift_size,
            variables = self.domains.len(),
            constraints = self.store.len(),
        );
        for (kind, count) in self.store.summary() {
            debug!(event = "model_constraints", kind = kind, count = count);
        }

        Ok(Model {
            variant,
            num_people,
            num_shifts,
            shift_size,
            names: self.names,
            initial: self.domains,
            store: self.store,
            layout,
            works,
            decisions,
            branching,
        })
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()?;

        let num_people = self.people.len();
        for (index, person) in self.people.iter().enumerate() {
            if person.id.0 != index {
                return Err(ShiftForgeError::config(format!(
                    "person at position {} has id {}; ids must follow roster order",
                    index, person.id
                )));
            }
        }
        if self.config.shift_size > num_people {
            return Err(ShiftForgeError::config(format!(
                "shift_size {} exceeds roster size {}",
                self.config.shift_size, num_people
            )));
        }
        for group in &self.config.friend_groups {
            group.check(num_people).map_err(ShiftForgeError::Config)?;
        }
        if let Some(candidates) = &self.config.split_candidates {
            if let Some(unknown) = candidates.iter().find(|p| p.0 >= num_people) {
                return Err(ShiftForgeError::config(format!(
                    "split candidate {} is not on the roster of {} people",
                    unknown, num_people
                )));
            }
        }
        debug!(
            event = "config_validated",
            people = num_people,
            friend_groups = self.config.friend_groups.len(),
        );
        Ok(())
    }

    fn new_var(&mut self, name: String, domain: Domain) -> VarId {
        let var = VarId(self.domains.len());
        self.names.push(name);
        self.domains.push(domain);
        var
    }

    /// `works[person][shift]`, fixed to 0 where the person is unavailable.
    fn works_indicators(&mut self) -> Vec<Vec<VarId>> {
        let people = self.people;
        let num_shifts = self.config.num_shifts;
        let mut works = Vec::with_capacity(people.len());
        for person in people {
            let mut row = Vec::with_capacity(num_shifts);
            for shift in ShiftIndex::range(num_shifts) {
                let domain = if person.is_available(shift) {
                    Domain::boolean()
                } else {
                    Domain::singleton(0)
                };
                row.push(self.new_var(format!("works({}, {})", person.id, shift), domain));
            }
            works.push(row);
        }
        works
    }

    fn shift_major(&mut self, works: &[Vec<VarId>]) -> Layout {
        let num_people = self.people.len();
        let shift_size = self.config.shift_size;
        let mut slots = Vec::with_capacity(self.config.num_shifts);

        for shift in ShiftIndex::range(self.config.num_shifts) {
            let row: Vec<VarId> = (0..shift_size)
                .map(|slot| {
                    self.new_var(
                        format!("slot({}, {})", shift, slot),
                        Domain::range(num_people - 1),
                    )
                })
                .collect();

            self.store.post(Constraint::AllDifferent {
                vars: row.clone(),
                except: None,
            });
            for (person, indicators) in works.iter().enumerate() {
                self.store.post(Constraint::ReifiedOr {
                    sources: row.clone(),
                    value: person,
                    indicator: indicators[shift.0],
                });
            }
            slots.push(row);
        }

        Layout::ShiftMajor { slots }
    }

    /// Person-major arrays. `threshold` selects positions `0..=shift_size`
    /// with a shared idle value; otherwise positions are full ranks.
    fn person_major(&mut self, works: &[Vec<VarId>], threshold: bool) -> Layout {
        let num_people = self.people.len();
        let num_shifts = self.config.num_shifts;
        let shift_size = self.config.shift_size;
        let (position_max, occupant_count) = if threshold {
            (shift_size, shift_size)
        } else {
            (num_people.saturating_sub(1), num_people)
        };

        let mut positions: Vec<Vec<VarId>> = Vec::with_capacity(num_people);
        for person in 0..num_people {
            let row = ShiftIndex::range(num_shifts)
                .map(|shift| {
                    self.new_var(
                        format!("position({}, {})", PersonId(person), shift),
                        Domain::range(position_max),
                    )
                })
                .collect();
            positions.push(row);
        }

        let mut occupants: Vec<Vec<VarId>> = Vec::with_capacity(num_shifts);
        for shift in ShiftIndex::range(num_shifts) {
            let row: Vec<VarId> = (0..occupant_count)
                .map(|position| {
                    self.new_var(
                        format!("occupant({}, {})", shift, position),
                        Domain::range(num_people - 1),
                    )
                })
                .collect();

            let column: Vec<VarId> = positions.iter().map(|r| r[shift.0]).collect();
            self.store.post(Constraint::AllDifferent {
                vars: column.clone(),
                except: threshold.then_some(shift_size),
            });
            self.store.post(Constraint::AllDifferent {
                vars: row.clone(),
                except: None,
            });
            self.store.post(Constraint::Channeling {
                forward: column.clone(),
                inverse: row.clone(),
            });
            for (person, &x) in column.iter().enumerate() {
                self.store.post(Constraint::ReifiedThreshold {
                    x,
                    bound: shift_size,
                    indicator: works[person][shift.0],
                });
            }
            occupants.push(row);
        }

        Layout::PersonMajor {
            positions,
            occupants,
        }
    }

    /// Exactly `shift_size` people work each shift.
    fn post_staffing(&mut self, works: &[Vec<VarId>]) {
        for shift in 0..self.config.num_shifts {
            self.store.post(Constraint::LinearSum {
                vars: works.iter().map(|row| row[shift]).collect(),
                relation: Relation::Equal(self.config.shift_size),
            });
        }
    }

    fn post_veteran_coverage(&mut self, works: &[Vec<VarId>]) {
        let veterans: Vec<usize> = self
            .people
            .iter()
            .filter(|p| p.veteran)
            .map(|p| p.id.0)
            .collect();
        if veterans.is_empty() {
            warn!(
                event = "no_veterans",
                "veteran coverage is enforced but the roster has no veterans"
            );
        }
        for shift in 0..self.config.num_shifts {
            self.store.post(Constraint::LinearSum {
                vars: veterans.iter().map(|&p| works[p][shift]).collect(),
                relation: Relation::Greater(0),
            });
        }
    }

    fn post_shift_cap(&mut self, works: &[Vec<VarId>]) {
        let relation = match &self.config.shift_cap {
            ShiftCap::AtMost(max) => Relation::Less(max + 1),
            ShiftCap::OneOf(counts) => Relation::OneOf(counts.clone()),
        };
        for row in works {
            self.store.post(Constraint::LinearSum {
                vars: row.clone(),
                relation: relation.clone(),
            });
        }
    }

    /// Shift demand against what the shift cap leaves, for everyone and
    /// for the veterans alone.
    fn post_capacity(&mut self, works: &[Vec<VarId>]) {
        let max_per_row = self.config.shift_cap.most();
        self.store.post(Constraint::Capacity {
            rows: works.to_vec(),
            demand: self.config.shift_size,
            max_per_row,
        });
        if self.config.enforce_veteran_coverage {
            let veterans: Vec<Vec<VarId>> = self
                .people
                .iter()
                .filter(|p| p.veteran)
                .map(|p| works[p.id.0].clone())
                .collect();
            self.store.post(Constraint::Capacity {
                rows: veterans,
                demand: 1,
                max_per_row,
            });
        }
    }

    /// Followers work exactly the shifts their group's reference works.
    fn post_friend_groups(&mut self, works: &[Vec<VarId>]) {
        let config = self.config;
        for group in &config.friend_groups {
            let Some(reference) = group.reference() else {
                continue;
            };
            for follower in group.followers() {
                for shift in 0..config.num_shifts {
                    self.store.post(Constraint::Equality {
                        a: works[reference.0][shift],
                        b: works[follower.0][shift],
                    });
                }
            }
        }
    }

    /// Split-eligible people never work two consecutive shifts of one day
    /// part.
    fn post_split_adjacency(&mut self, works: &[Vec<VarId>]) {
        let candidates: BTreeSet<usize> = match &self.config.split_candidates {
            Some(ids) => ids.iter().map(|p| p.0).collect(),
            None => self
                .people
                .iter()
                .filter(|p| p.split_preference)
                .map(|p| p.id.0)
                .collect(),
        };
        let num_shifts = self.config.num_shifts;
        for person in candidates {
            for shift in ShiftIndex::range(num_shifts.saturating_sub(1)) {
                if shift.is_day_final() {
                    continue;
                }
                self.store.post(Constraint::LinearSum {
                    vars: vec![works[person][shift.0], works[person][shift.0 + 1]],
                    relation: Relation::Less(2),
                });
            }
        }
    }
}
