//! The fixed shift enumeration.
//!
//! A scheduling day has three day parts. Each day part is split into an
//! `Early` and a `Late` period, and each period into a first and a second
//! half, giving 12 shifts:
//!
//! | Day part | Early | Late   |
//! |----------|-------|--------|
//! | 0        | 0, 1  | 2, 3   |
//! | 1        | 4, 5  | 6, 7   |
//! | 2        | 8, 9  | 10, 11 |

use std::fmt;

/// Number of day parts in a scheduling day.
pub const DAY_PARTS: usize = 3;

/// Number of shifts in one day part (two periods of two halves).
pub const SHIFTS_PER_DAY_PART: usize = 4;

/// Total number of shifts in the enumeration.
pub const MAX_SHIFTS: usize = DAY_PARTS * SHIFTS_PER_DAY_PART;

/// Index of a shift in the fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShiftIndex(pub usize);

impl ShiftIndex {
    /// Builds the shift index for a day part, period and half.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftforge_core::{DayPart, Half, Period, ShiftIndex};
    ///
    /// let shift = ShiftIndex::of(DayPart(1), Period::Late, Half::Second);
    /// assert_eq!(shift, ShiftIndex(7));
    /// assert!(shift.is_day_final());
    /// ```
    pub fn of(day_part: DayPart, period: Period, half: Half) -> Self {
        ShiftIndex(day_part.0 * SHIFTS_PER_DAY_PART + period.offset() + half.offset())
    }

    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the day part this shift belongs to.
    pub fn day_part(self) -> DayPart {
        DayPart(self.0 / SHIFTS_PER_DAY_PART)
    }

    /// Returns the period within the day part.
    pub fn period(self) -> Period {
        if self.0 % SHIFTS_PER_DAY_PART < 2 {
            Period::Early
        } else {
            Period::Late
        }
    }

    /// Returns the half within the period.
    pub fn half(self) -> Half {
        if self.0 % 2 == 0 {
            Half::First
        } else {
            Half::Second
        }
    }

    /// Returns true for the last shift of a day part (3, 7, 11).
    ///
    /// Adjacency rules never pair a day-final shift with the next one.
    pub fn is_day_final(self) -> bool {
        (self.0 + 1) % SHIFTS_PER_DAY_PART == 0
    }

    /// Iterates over the first `count` shifts.
    pub fn range(count: usize) -> impl Iterator<Item = ShiftIndex> {
        (0..count).map(ShiftIndex)
    }
}

impl fmt::Display for ShiftIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ShiftIndex {
    fn from(index: usize) -> Self {
        ShiftIndex(index)
    }
}

/// One of the three day parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayPart(pub usize);

impl DayPart {
    /// Iterates over all day parts in order.
    pub fn all() -> impl Iterator<Item = DayPart> {
        (0..DAY_PARTS).map(DayPart)
    }

    /// Returns both halves of the given period in this day part.
    pub fn shifts(self, period: Period) -> [ShiftIndex; 2] {
        [
            ShiftIndex::of(self, period, Half::First),
            ShiftIndex::of(self, period, Half::Second),
        ]
    }
}

/// Early or late period of a day part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Early,
    Late,
}

impl Period {
    fn offset(self) -> usize {
        match self {
            Period::Early => 0,
            Period::Late => 2,
        }
    }
}

/// First or second half of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    First,
    Second,
}

impl Half {
    fn offset(self) -> usize {
        match self {
            Half::First => 0,
            Half::Second => 1,
        }
    }
}
