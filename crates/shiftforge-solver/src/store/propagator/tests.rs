//! Tests for individual propagators.

use super::*;
use crate::store::constraint::Relation;

fn dom(values: &[usize]) -> Domain {
    Domain::from_values(values.iter().copied())
}

fn vars(n: usize) -> Vec<VarId> {
    (0..n).map(VarId).collect()
}

fn run(propagator: &dyn Propagator, domains: &mut [Domain]) -> Propagation {
    let mut modified = Vec::new();
    let mut ctx = PropagationContext::new(domains, &mut modified);
    propagator.propagate(&mut ctx)
}

fn values(domain: &Domain) -> Vec<usize> {
    domain.iter().collect()
}

#[test]
fn test_all_different_chains_eliminations() {
    let mut domains = vec![dom(&[1]), dom(&[0, 1, 2]), dom(&[1, 2])];
    run(&AllDifferent::new(vars(3)), &mut domains).unwrap();

    assert_eq!(values(&domains[0]), vec![1]);
    assert_eq!(values(&domains[1]), vec![0]);
    assert_eq!(values(&domains[2]), vec![2]);
}

#[test]
fn test_all_different_duplicate_fails() {
    let mut domains = vec![dom(&[3]), dom(&[3])];
    let result = run(&AllDifferent::new(vars(2)), &mut domains);
    assert!(matches!(result, Err(Conflict::EmptyDomain(_))));
}

#[test]
fn test_all_different_pigeonhole() {
    let mut domains = vec![dom(&[0, 1]), dom(&[0, 1]), dom(&[0, 1])];
    let result = run(&AllDifferent::new(vars(3)), &mut domains);
    assert_eq!(result, Err(Conflict::Unsatisfiable("AllDifferent")));
}

#[test]
fn test_all_different_tolerates_shared_value() {
    let mut domains = vec![dom(&[2]), dom(&[2]), dom(&[0, 2])];
    run(&AllDifferent::except(vars(3), 2), &mut domains).unwrap();
    assert_eq!(values(&domains[2]), vec![0, 2]);
}

#[test]
fn test_all_different_except_still_separates_other_values() {
    let mut domains = vec![dom(&[0]), dom(&[0, 1]), dom(&[0, 2])];
    run(&AllDifferent::except(vars(3), 2), &mut domains).unwrap();
    assert_eq!(values(&domains[1]), vec![1]);
    assert_eq!(values(&domains[2]), vec![2]);
}

#[test]
fn test_channeling_propagates_both_ways() {
    // forward = v0, v1; inverse = v2, v3
    let mut domains = vec![dom(&[1]), dom(&[0, 1]), dom(&[0, 1]), dom(&[0, 1])];
    let channel = Channeling::new(vec![VarId(0), VarId(1)], vec![VarId(2), VarId(3)]);
    run(&channel, &mut domains).unwrap();

    assert_eq!(domains[1].value(), Some(0));
    assert_eq!(domains[2].value(), Some(1));
    assert_eq!(domains[3].value(), Some(0));
}

#[test]
fn test_channeling_staffs_position_with_last_candidate() {
    // Three people with positions {0 = working, 1 = idle}; one position.
    let mut domains = vec![dom(&[1]), dom(&[1]), dom(&[0, 1]), dom(&[0, 1, 2])];
    let channel = Channeling::new(vars(3), vec![VarId(3)]);
    run(&channel, &mut domains).unwrap();

    assert_eq!(domains[3].value(), Some(2));
    assert_eq!(domains[2].value(), Some(0));
}

#[test]
fn test_channeling_unstaffable_position_fails() {
    let mut domains = vec![dom(&[1]), dom(&[1]), dom(&[0, 1])];
    let channel = Channeling::new(vars(2), vec![VarId(2)]);
    assert!(run(&channel, &mut domains).is_err());
}

#[test]
fn test_reified_threshold() {
    let threshold = ReifiedThreshold::new(VarId(0), 2, VarId(1));

    let mut domains = vec![dom(&[0, 1, 2, 3]), dom(&[1])];
    run(&threshold, &mut domains).unwrap();
    assert_eq!(values(&domains[0]), vec![0, 1]);

    let mut domains = vec![dom(&[0, 1, 2, 3]), dom(&[0])];
    run(&threshold, &mut domains).unwrap();
    assert_eq!(values(&domains[0]), vec![2, 3]);

    let mut domains = vec![dom(&[2, 3]), Domain::boolean()];
    run(&threshold, &mut domains).unwrap();
    assert_eq!(domains[1].value(), Some(0));

    let mut domains = vec![dom(&[0, 1]), Domain::boolean()];
    run(&threshold, &mut domains).unwrap();
    assert_eq!(domains[1].value(), Some(1));
}

#[test]
fn test_reified_or_forces_single_candidate() {
    let or = ReifiedOr::new(vec![VarId(0), VarId(1)], 0, VarId(2));
    let mut domains = vec![dom(&[0, 1, 2]), dom(&[1, 2]), dom(&[1])];
    run(&or, &mut domains).unwrap();
    assert_eq!(domains[0].value(), Some(0));
}

#[test]
fn test_reified_or_false_removes_value() {
    let or = ReifiedOr::new(vec![VarId(0), VarId(1)], 0, VarId(2));
    let mut domains = vec![dom(&[0, 1, 2]), dom(&[0, 2]), dom(&[0])];
    run(&or, &mut domains).unwrap();
    assert_eq!(values(&domains[0]), vec![1, 2]);
    assert_eq!(values(&domains[1]), vec![2]);
}

#[test]
fn test_reified_or_derives_indicator() {
    let or = ReifiedOr::new(vec![VarId(0), VarId(1)], 4, VarId(2));

    let mut domains = vec![dom(&[4]), dom(&[1, 2]), Domain::boolean()];
    run(&or, &mut domains).unwrap();
    assert_eq!(domains[2].value(), Some(1));

    let mut domains = vec![dom(&[0, 3]), dom(&[1, 2]), Domain::boolean()];
    run(&or, &mut domains).unwrap();
    assert_eq!(domains[2].value(), Some(0));
}

#[test]
fn test_reified_or_over_no_sources_is_false() {
    let or = ReifiedOr::new(vec![], 0, VarId(0));
    let mut domains = vec![Domain::boolean()];
    run(&or, &mut domains).unwrap();
    assert_eq!(domains[0].value(), Some(0));
}

#[test]
fn test_linear_greater_forces_last_open() {
    let sum = LinearSum::new(vars(3), Relation::Greater(0));
    let mut domains = vec![dom(&[0]), Domain::boolean(), dom(&[0])];
    run(&sum, &mut domains).unwrap();
    assert_eq!(domains[1].value(), Some(1));
}

#[test]
fn test_linear_greater_over_nothing_fails() {
    let sum = LinearSum::new(vec![], Relation::Greater(0));
    let mut domains: Vec<Domain> = vec![];
    assert_eq!(
        run(&sum, &mut domains),
        Err(Conflict::Unsatisfiable("LinearSum"))
    );
}

#[test]
fn test_linear_less_clears_open_at_cap() {
    let sum = LinearSum::new(vars(4), Relation::Less(3));
    let mut domains = vec![dom(&[1]), dom(&[1]), Domain::boolean(), Domain::boolean()];
    run(&sum, &mut domains).unwrap();
    assert_eq!(domains[2].value(), Some(0));
    assert_eq!(domains[3].value(), Some(0));
}

#[test]
fn test_linear_less_violated() {
    let sum = LinearSum::new(vars(2), Relation::Less(2));
    let mut domains = vec![dom(&[1]), dom(&[1])];
    assert!(run(&sum, &mut domains).is_err());
}

#[test]
fn test_linear_one_of_skips_excluded_count() {
    let sum = LinearSum::new(vars(3), Relation::OneOf(vec![0, 2]));
    let mut domains = vec![dom(&[1]), dom(&[0]), Domain::boolean()];
    run(&sum, &mut domains).unwrap();
    assert_eq!(domains[2].value(), Some(1));

    let mut domains = vec![dom(&[1]), dom(&[0]), dom(&[0])];
    assert!(run(&sum, &mut domains).is_err());
}

#[test]
fn test_linear_equal() {
    let sum = LinearSum::new(vars(3), Relation::Equal(2));
    let mut domains = vec![dom(&[1]), dom(&[1]), Domain::boolean()];
    run(&sum, &mut domains).unwrap();
    assert_eq!(domains[2].value(), Some(0));

    let mut domains = vec![dom(&[0]), dom(&[0]), Domain::boolean()];
    assert!(run(&sum, &mut domains).is_err());
}

fn grid(rows: usize, columns: usize) -> Vec<Vec<VarId>> {
    (0..rows)
        .map(|r| (0..columns).map(|c| VarId(r * columns + c)).collect())
        .collect()
}

#[test]
fn test_capacity_short_of_demand_fails() {
    // two people working one shift each can't cover three shifts
    let capacity = Capacity::new(grid(2, 3), 1, 1);
    let mut domains = vec![Domain::boolean(); 6];
    assert_eq!(
        run(&capacity, &mut domains),
        Err(Conflict::Unsatisfiable("Capacity"))
    );
}

#[test]
fn test_capacity_enough_rows_holds() {
    let capacity = Capacity::new(grid(3, 3), 1, 1);
    let mut domains = vec![Domain::boolean(); 9];
    run(&capacity, &mut domains).unwrap();
    assert!(domains.iter().all(|d| d.size() == 2));
}

#[test]
fn test_capacity_counts_used_rows() {
    // row 0 already spent its one shift on column 0; column 1 has nobody left
    let capacity = Capacity::new(grid(2, 2), 1, 1);
    let mut domains = vec![dom(&[1]), Domain::boolean(), Domain::boolean(), dom(&[0])];
    assert_eq!(
        run(&capacity, &mut domains),
        Err(Conflict::Unsatisfiable("Capacity"))
    );
}

#[test]
fn test_capacity_ignores_covered_columns() {
    // the open cell of row 1 sits in a column that is already covered
    let capacity = Capacity::new(grid(2, 2), 1, 2);
    let mut domains = vec![dom(&[1]), dom(&[0]), Domain::boolean(), dom(&[0])];
    assert_eq!(
        run(&capacity, &mut domains),
        Err(Conflict::Unsatisfiable("Capacity"))
    );

    let mut domains = vec![dom(&[1]), Domain::boolean(), Domain::boolean(), dom(&[0])];
    run(&capacity, &mut domains).unwrap();
}

#[test]
fn test_equality_intersects() {
    let eq = Equality::new(VarId(0), VarId(1));
    let mut domains = vec![Domain::boolean(), dom(&[1])];
    run(&eq, &mut domains).unwrap();
    assert_eq!(domains[0].value(), Some(1));

    let mut domains = vec![dom(&[0]), dom(&[1])];
    assert!(run(&eq, &mut domains).is_err());
}
