//! Independent rule checks over a solved roster.
//!
//! A roster is given as the workers of each shift, so the checks don't
//! depend on the solver's types.

use std::collections::BTreeSet;

use shiftforge_config::ScheduleConfig;
use shiftforge_core::{Person, PersonId, ShiftIndex};

/// A broken rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    ShiftCount { expected: usize, found: usize },
    DuplicateWorker { shift: usize, person: PersonId },
    Staffing { shift: usize, expected: usize, found: usize },
    UnknownPerson { shift: usize, person: PersonId },
    Unavailable { shift: usize, person: PersonId },
    NoVeteran { shift: usize },
    ShiftCap { person: PersonId, count: usize },
    FriendsApart { group: usize, shift: usize },
    SplitAdjacent { person: PersonId, shift: usize },
}

/// Lists every rule `shifts` breaks under `config`.
pub fn violations(
    people: &[Person],
    config: &ScheduleConfig,
    shifts: &[Vec<PersonId>],
) -> Vec<Violation> {
    let mut found = Vec::new();
    if shifts.len() != config.num_shifts {
        found.push(Violation::ShiftCount {
            expected: config.num_shifts,
            found: shifts.len(),
        });
    }

    let mut works: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); people.len()];
    for (shift, workers) in shifts.iter().enumerate() {
        if workers.len() != config.shift_size {
            found.push(Violation::Staffing {
                shift,
                expected: config.shift_size,
                found: workers.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for &person in workers {
            if !seen.insert(person) {
                found.push(Violation::DuplicateWorker { shift, person });
            }
            match people.get(person.0) {
                None => found.push(Violation::UnknownPerson { shift, person }),
                Some(p) => {
                    if !p.is_available(ShiftIndex(shift)) {
                        found.push(Violation::Unavailable { shift, person });
                    }
                    works[person.0].insert(shift);
                }
            }
        }
        if config.enforce_veteran_coverage
            && !workers
                .iter()
                .any(|p| people.get(p.0).is_some_and(|p| p.veteran))
        {
            found.push(Violation::NoVeteran { shift });
        }
    }

    for (person, shifts_worked) in works.iter().enumerate() {
        if !config.shift_cap.allows(shifts_worked.len()) {
            found.push(Violation::ShiftCap {
                person: PersonId(person),
                count: shifts_worked.len(),
            });
        }
    }

    for (index, group) in config.friend_groups.iter().enumerate() {
        for shift in 0..shifts.len() {
            let states: BTreeSet<bool> = group
                .members()
                .iter()
                .filter_map(|m| works.get(m.0))
                .map(|w| w.contains(&shift))
                .collect();
            if states.len() > 1 {
                found.push(Violation::FriendsApart {
                    group: index,
                    shift,
                });
            }
        }
    }

    if config.enforce_split_adjacency {
        let candidates: Vec<usize> = match &config.split_candidates {
            Some(ids) => ids.iter().map(|p| p.0).collect(),
            None => people
                .iter()
                .filter(|p| p.split_preference)
                .map(|p| p.id.0)
                .collect(),
        };
        for person in candidates {
            let Some(worked) = works.get(person) else {
                continue;
            };
            for &shift in worked {
                if !ShiftIndex(shift).is_day_final() && worked.contains(&(shift + 1)) {
                    found.push(Violation::SplitAdjacent {
                        person: PersonId(person),
                        shift,
                    });
                }
            }
        }
    }

    found
}

/// Panics with the list of violations if `shifts` breaks any rule.
pub fn assert_valid_roster(people: &[Person], config: &ScheduleConfig, shifts: &[Vec<PersonId>]) {
    let found = violations(people, config, shifts);
    assert!(found.is_empty(), "roster breaks rules: {found:?}\nroster: {shifts:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people::everyone_available;
    use shiftforge_config::ShiftCap;
    use shiftforge_core::FriendGroup;

    fn ids(rows: &[&[usize]]) -> Vec<Vec<PersonId>> {
        rows.iter()
            .map(|row| row.iter().copied().map(PersonId).collect())
            .collect()
    }

    #[test]
    fn test_valid_roster_has_no_violations() {
        let people = everyone_available(4, 2, [0, 2]);
        let config = ScheduleConfig::new().with_num_shifts(2);
        assert!(violations(&people, &config, &ids(&[&[0, 1], &[2, 3]])).is_empty());
    }

    #[test]
    fn test_detects_missing_veteran_and_duplicates() {
        let people = everyone_available(4, 2, [0]);
        let config = ScheduleConfig::new().with_num_shifts(2);
        let found = violations(&people, &config, &ids(&[&[0, 0], &[1, 2]]));
        assert!(found.contains(&Violation::DuplicateWorker {
            shift: 0,
            person: PersonId(0)
        }));
        assert!(found.contains(&Violation::NoVeteran { shift: 1 }));
    }

    #[test]
    fn test_detects_cap_and_friends() {
        let people = everyone_available(4, 3, [0, 1, 2, 3]);
        let config = ScheduleConfig::new()
            .with_num_shifts(3)
            .with_shift_cap(ShiftCap::zero_or_two())
            .with_friend_group(FriendGroup::new([0, 1]));
        let found = violations(&people, &config, &ids(&[&[0, 2], &[0, 3], &[1, 2]]));
        assert!(found.contains(&Violation::ShiftCap {
            person: PersonId(1),
            count: 1
        }));
        assert!(found.contains(&Violation::FriendsApart { group: 0, shift: 0 }));
    }

    #[test]
    fn test_detects_split_adjacency() {
        let mut people = everyone_available(2, 4, [0, 1]);
        people[0].split_preference = true;
        let config = ScheduleConfig::new()
            .with_num_shifts(4)
            .with_shift_size(1)
            .with_split_adjacency(true);
        let found = violations(&people, &config, &ids(&[&[0], &[0], &[1], &[1]]));
        assert_eq!(
            found,
            vec![Violation::SplitAdjacent {
                person: PersonId(0),
                shift: 0
            }]
        );
    }
}
