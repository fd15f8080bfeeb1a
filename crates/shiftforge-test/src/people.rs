//! Roster builders.

use shiftforge_core::Person;

/// `n` people available on shifts `0..num_shifts`; the listed ids are
/// veterans.
pub fn everyone_available(
    n: usize,
    num_shifts: usize,
    veterans: impl IntoIterator<Item = usize>,
) -> Vec<Person> {
    let veterans: Vec<usize> = veterans.into_iter().collect();
    (0..n)
        .map(|i| {
            Person::new(i, format!("P{i}"))
                .with_contact(format!("p{i}@example.com"))
                .with_veteran(veterans.contains(&i))
                .available_on(0..num_shifts)
        })
        .collect()
}

/// `n` people available everywhere, every even id a veteran.
///
/// With two people per shift and a cap of two shifts, filling shifts in
/// order pairs `2k` with `2k + 1`, so every shift gets a veteran.
pub fn alternating_veterans(n: usize, num_shifts: usize) -> Vec<Person> {
    everyone_available(n, num_shifts, (0..n).step_by(2))
}

/// Twelve people with a unique valid roster over twelve shifts:
/// veteran `k` and newcomer `6 + k` are the only people available on
/// shifts `2k` and `2k + 1`.
pub fn paired_roster() -> Vec<Person> {
    (0..12)
        .map(|i| {
            let k = i % 6;
            Person::new(i, format!("P{i}"))
                .with_veteran(i < 6)
                .available_on([2 * k, 2 * k + 1])
        })
        .collect()
}

/// `n` people where only the listed ids are available, on shift 0 only.
/// Person 0 is the only veteran.
pub fn single_shift_roster(n: usize, available: impl IntoIterator<Item = usize>) -> Vec<Person> {
    let available: Vec<usize> = available.into_iter().collect();
    (0..n)
        .map(|i| {
            let person = Person::new(i, format!("P{i}")).with_veteran(i == 0);
            if available.contains(&i) {
                person.available_on([0])
            } else {
                person
            }
        })
        .collect()
}
