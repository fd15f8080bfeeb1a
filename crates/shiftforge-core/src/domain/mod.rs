//! Roster domain types
//!
//! These types describe the immutable input of a solve:
//! - `Person`: A respondent with availability and rule flags
//! - `ShiftIndex`: One of the fixed shifts of the scheduling day
//! - `FriendGroup`: People who must work exactly the same shifts

mod group;
mod person;
mod shift;

pub use group::FriendGroup;
pub use person::{Person, PersonId};
pub use shift::{DayPart, Half, Period, ShiftIndex, DAY_PARTS, MAX_SHIFTS, SHIFTS_PER_DAY_PART};

#[cfg(test)]
mod tests;
