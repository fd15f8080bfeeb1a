//! Tests for the model builder.

use super::*;
use shiftforge_config::{ModelVariant, ScheduleConfig, ShiftCap};
use shiftforge_core::{FriendGroup, PersonId, ShiftForgeError, ShiftIndex};
use shiftforge_test::people::{everyone_available, paired_roster};

use crate::store::{Constraint, Relation};

fn count(model: &Model, kind: &str) -> usize {
    model
        .constraints()
        .summary()
        .into_iter()
        .find(|(k, _)| *k == kind)
        .map_or(0, |(_, n)| n)
}

fn config_error(people: &[Person], config: &ScheduleConfig) -> String {
    match Model::build(people, config) {
        Err(ShiftForgeError::Config(message)) => message,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_shift_major_sizes() {
    let people = paired_roster();
    let model = Model::build(&people, &ScheduleConfig::new()).unwrap();

    // 144 works indicators and 24 slots.
    assert_eq!(model.variable_count(), 168);
    assert_eq!(model.decision_variables().len(), 24);
    assert_eq!(model.branching_order().len(), 168);
    assert_eq!(
        &model.branching_order()[..24],
        model.decision_variables()
    );

    assert_eq!(count(&model, "AllDifferent"), 12);
    assert_eq!(count(&model, "ReifiedOr"), 144);
    // staffing, coverage and shift cap
    assert_eq!(count(&model, "LinearSum"), 36);
    // everyone and veterans
    assert_eq!(count(&model, "Capacity"), 2);
    assert_eq!(model.constraint_count(), 194);
}

#[test]
fn test_slot_domains_cover_the_roster() {
    let people = everyone_available(5, 2, [0]);
    let model = Model::build(&people, &ScheduleConfig::new().with_num_shifts(2)).unwrap();
    let slot = model.decision_variables()[0];
    assert_eq!(model.initial_domain(slot), &Domain::range(4));
    assert_eq!(model.variable_name(slot), "slot(0, 0)");
}

#[test]
fn test_person_major_ranked_layout() {
    let people = everyone_available(4, 2, [0]);
    let config = ScheduleConfig::new()
        .with_num_shifts(2)
        .with_model_variant(ModelVariant::PersonMajorRanked);
    let model = Model::build(&people, &config).unwrap();

    // works 0..8, positions 8..16, occupants 16..24
    assert_eq!(model.variable_count(), 24);
    assert_eq!(model.decision_variables().len(), 8);
    assert_eq!(model.variable_name(VarId(8)), "position(0, 0)");
    assert_eq!(model.variable_name(VarId(16)), "occupant(0, 0)");
    assert_eq!(model.initial_domain(VarId(8)), &Domain::range(3));

    let order = model.branching_order();
    assert_eq!(order.len(), 24);
    assert_eq!(
        &order[..6],
        &[VarId(16), VarId(17), VarId(20), VarId(21), VarId(8), VarId(10)]
    );
    assert_ne!(&order[..8], model.decision_variables());

    assert_eq!(count(&model, "Channeling"), 2);
    assert_eq!(count(&model, "AllDifferent"), 4);
    assert_eq!(count(&model, "ReifiedThreshold"), 8);
    assert_eq!(model.constraint_count(), 24);
}

#[test]
fn test_person_major_threshold_layout() {
    let people = everyone_available(4, 2, [0]);
    let config = ScheduleConfig::new()
        .with_num_shifts(2)
        .with_model_variant(ModelVariant::PersonMajorThreshold);
    let model = Model::build(&people, &config).unwrap();

    // works 8, positions 8, occupants 2 per shift
    assert_eq!(model.variable_count(), 20);
    assert_eq!(model.initial_domain(VarId(8)), &Domain::range(2));
    match model.layout() {
        Layout::PersonMajor { occupants, .. } => {
            assert!(occupants.iter().all(|row| row.len() == 2));
        }
        other => panic!("unexpected layout {other:?}"),
    }
}

#[test]
fn test_unavailable_indicator_is_fixed_to_zero() {
    let people = paired_roster();
    let model = Model::build(&people, &ScheduleConfig::new()).unwrap();

    let unavailable = model.works_var(PersonId(0), ShiftIndex(5)).unwrap();
    let available = model.works_var(PersonId(0), ShiftIndex(1)).unwrap();
    assert_eq!(model.initial_domain(unavailable), &Domain::singleton(0));
    assert_eq!(model.initial_domain(available), &Domain::boolean());
    assert_eq!(model.variable_name(available), "works(0, 1)");
    assert!(model.works_var(PersonId(12), ShiftIndex(0)).is_none());
}

#[test]
fn test_coverage_off_drops_coverage_sums() {
    let people = paired_roster();
    let with = Model::build(&people, &ScheduleConfig::new()).unwrap();
    let without =
        Model::build(&people, &ScheduleConfig::new().with_veteran_coverage(false)).unwrap();
    assert_eq!(count(&with, "LinearSum") - count(&without, "LinearSum"), 12);
    assert_eq!(count(&without, "Capacity"), 1);
}

#[test]
fn test_capacity_uses_cap_maximum() {
    let people = everyone_available(4, 2, [0, 2]);
    let config = ScheduleConfig::new()
        .with_num_shifts(2)
        .with_shift_cap(ShiftCap::OneOf(vec![0, 1]));
    let model = Model::build(&people, &config).unwrap();
    let capacities: Vec<(usize, usize, usize)> = model
        .constraints()
        .iter()
        .filter_map(|c| match c {
            Constraint::Capacity {
                rows,
                demand,
                max_per_row,
            } => Some((rows.len(), *demand, *max_per_row)),
            _ => None,
        })
        .collect();
    assert_eq!(capacities, vec![(4, 2, 1), (2, 1, 1)]);
}

#[test]
fn test_friend_group_ties_followers() {
    let people = everyone_available(6, 2, [0]);
    let config = ScheduleConfig::new()
        .with_num_shifts(2)
        .with_friend_group(FriendGroup::new([1, 2, 3]));
    let model = Model::build(&people, &config).unwrap();
    assert_eq!(count(&model, "Equality"), 4);
}

#[test]
fn test_split_adjacency_skips_day_final_pairs() {
    let people = everyone_available(12, 12, [0]);
    let base = Model::build(&people, &ScheduleConfig::new()).unwrap();
    let config = ScheduleConfig::new()
        .with_split_adjacency(true)
        .with_split_candidates([0, 1]);
    let model = Model::build(&people, &config).unwrap();
    // pairs (s, s+1) for s in 0..11 except 3 and 7
    assert_eq!(count(&model, "LinearSum") - count(&base, "LinearSum"), 18);
}

#[test]
fn test_split_candidates_default_to_preference_flag() {
    let mut people = everyone_available(4, 4, [0]);
    people[2].split_preference = true;
    let config = ScheduleConfig::new()
        .with_num_shifts(4)
        .with_split_adjacency(true);
    let base = Model::build(&people, &ScheduleConfig::new().with_num_shifts(4)).unwrap();
    let model = Model::build(&people, &config).unwrap();
    // pairs (0,1), (1,2), (2,3) for one person
    assert_eq!(count(&model, "LinearSum") - count(&base, "LinearSum"), 3);
}

#[test]
fn test_shift_cap_relation() {
    let people = everyone_available(4, 2, [0]);
    let config = ScheduleConfig::new()
        .with_num_shifts(2)
        .with_shift_cap(ShiftCap::zero_or_two());
    let model = Model::build(&people, &config).unwrap();
    let caps: Vec<&Constraint> = model
        .constraints()
        .iter()
        .filter(|c| {
            matches!(c, Constraint::LinearSum { relation: Relation::OneOf(counts), .. } if counts == &vec![0, 2])
        })
        .collect();
    assert_eq!(caps.len(), 4);
}

#[test]
fn test_zero_shift_size_builds() {
    let people = everyone_available(3, 2, [0]);
    let config = ScheduleConfig::new().with_num_shifts(2).with_shift_size(0);
    let model = Model::build(&people, &config).unwrap();
    assert!(model.decision_variables().is_empty());
    assert_eq!(model.variable_count(), 6);
}

#[test]
fn test_build_is_deterministic() {
    let people = paired_roster();
    let config = ScheduleConfig::new().with_model_variant(ModelVariant::PersonMajorRanked);
    let a = Model::build(&people, &config).unwrap();
    let b = Model::build(&people, &config).unwrap();
    assert_eq!(a.branching_order(), b.branching_order());
    assert!(a.constraints().iter().eq(b.constraints().iter()));
}

#[test]
fn test_shift_size_above_roster_is_config_error() {
    let people = everyone_available(2, 1, [0]);
    let config = ScheduleConfig::new().with_num_shifts(1).with_shift_size(3);
    assert!(config_error(&people, &config).contains("exceeds roster size"));
}

#[test]
fn test_out_of_order_ids_are_config_error() {
    let mut people = everyone_available(3, 1, [0]);
    people.swap(0, 1);
    let config = ScheduleConfig::new().with_num_shifts(1);
    assert!(config_error(&people, &config).contains("roster order"));
}

#[test]
fn test_bad_friend_groups_are_config_errors() {
    let people = everyone_available(4, 1, [0]);
    for group in [
        FriendGroup::new([1]),
        FriendGroup::new([0, 1, 2, 3]),
        FriendGroup::new([1, 1]),
        FriendGroup::new([1, 9]),
    ] {
        let config = ScheduleConfig::new().with_num_shifts(1).with_friend_group(group);
        assert!(Model::build(&people, &config).is_err());
    }
}

#[test]
fn test_unknown_split_candidate_is_config_error() {
    let people = everyone_available(4, 1, [0]);
    let config = ScheduleConfig::new()
        .with_num_shifts(1)
        .with_split_candidates([7]);
    assert!(config_error(&people, &config).contains("split candidate 7"));
}

#[test]
fn test_shift_count_bounds_are_config_errors() {
    let people = everyone_available(4, 12, [0]);
    config_error(&people, &ScheduleConfig::new().with_num_shifts(0));
    config_error(&people, &ScheduleConfig::new().with_num_shifts(13));
}
