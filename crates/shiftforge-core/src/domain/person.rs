//! Person records.

use std::collections::BTreeSet;
use std::fmt;

use super::shift::{DayPart, Period, ShiftIndex};

/// Stable person identifier, assigned in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PersonId(pub usize);

impl PersonId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PersonId {
    fn from(index: usize) -> Self {
        PersonId(index)
    }
}

/// A person who can be put on the roster.
///
/// Immutable once loaded; the solver only reads it.
///
/// # Example
///
/// ```
/// use shiftforge_core::{DayPart, Period, Person, PersonId, ShiftIndex};
///
/// let person = Person::new(0, "Ada")
///     .with_contact("ada@example.org")
///     .with_veteran(true)
///     .available_in(DayPart(0), Period::Late);
///
/// assert_eq!(person.id, PersonId(0));
/// assert!(person.is_available(ShiftIndex(2)));
/// assert!(person.is_available(ShiftIndex(3)));
/// assert!(!person.is_available(ShiftIndex(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Contact handle, typically an e-mail address.
    pub contact: String,
    /// Experienced person counted by the veteran coverage rule.
    pub veteran: bool,
    /// Willing to take two half shifts instead of one block.
    pub split_preference: bool,
    pub availability: BTreeSet<ShiftIndex>,
}

impl Person {
    /// Creates a person with no availability and no flags set.
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id: PersonId(id),
            name: name.into(),
            contact: String::new(),
            veteran: false,
            split_preference: false,
            availability: BTreeSet::new(),
        }
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn with_veteran(mut self, veteran: bool) -> Self {
        self.veteran = veteran;
        self
    }

    pub fn with_split_preference(mut self, split: bool) -> Self {
        self.split_preference = split;
        self
    }

    /// Adds the given shifts to the availability set.
    pub fn available_on(mut self, shifts: impl IntoIterator<Item = usize>) -> Self {
        self.availability.extend(shifts.into_iter().map(ShiftIndex));
        self
    }

    /// Adds both halves of a period to the availability set.
    pub fn available_in(mut self, day_part: DayPart, period: Period) -> Self {
        self.availability.extend(day_part.shifts(period));
        self
    }

    pub fn is_available(&self, shift: ShiftIndex) -> bool {
        self.availability.contains(&shift)
    }
}
