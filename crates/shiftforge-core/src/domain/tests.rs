//! Tests for roster domain types.

use super::*;

#[test]
fn test_shift_enumeration_layout() {
    assert_eq!(MAX_SHIFTS, 12);
    assert_eq!(
        ShiftIndex::of(DayPart(0), Period::Early, Half::First),
        ShiftIndex(0)
    );
    assert_eq!(
        ShiftIndex::of(DayPart(2), Period::Late, Half::First),
        ShiftIndex(10)
    );
    assert_eq!(DayPart(1).shifts(Period::Early), [ShiftIndex(4), ShiftIndex(5)]);
}

#[test]
fn test_shift_decomposition() {
    for shift in ShiftIndex::range(MAX_SHIFTS) {
        let rebuilt = ShiftIndex::of(shift.day_part(), shift.period(), shift.half());
        assert_eq!(rebuilt, shift);
    }
}

#[test]
fn test_day_final_shifts() {
    let finals: Vec<usize> = ShiftIndex::range(MAX_SHIFTS)
        .filter(|s| s.is_day_final())
        .map(ShiftIndex::index)
        .collect();
    assert_eq!(finals, vec![3, 7, 11]);
}

#[test]
fn test_person_builder() {
    let person = Person::new(3, "Grace")
        .with_contact("grace@example.org")
        .with_split_preference(true)
        .available_on([1, 5])
        .available_in(DayPart(2), Period::Early);

    assert_eq!(person.id, PersonId(3));
    assert_eq!(person.contact, "grace@example.org");
    assert!(person.split_preference);
    assert!(!person.veteran);
    let shifts: Vec<usize> = person.availability.iter().map(|s| s.0).collect();
    assert_eq!(shifts, vec![1, 5, 8, 9]);
}

#[test]
fn test_friend_group_accessors() {
    let group = FriendGroup::new([4, 1, 7]);
    assert_eq!(group.reference(), Some(PersonId(4)));
    assert_eq!(group.followers(), &[PersonId(1), PersonId(7)]);
}

#[test]
fn test_friend_group_check() {
    assert!(FriendGroup::new([0, 1]).check(2).is_ok());
    assert!(FriendGroup::new([0]).check(2).is_err());
    assert!(FriendGroup::new([0, 1, 2, 3]).check(8).is_err());
    assert!(FriendGroup::new([0, 5]).check(3).is_err());
    assert!(FriendGroup::new([1, 1]).check(3).is_err());
}
