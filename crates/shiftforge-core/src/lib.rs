//! ShiftForge Core - Roster types for shift scheduling
//!
//! This crate provides the fundamental types shared by every ShiftForge crate:
//! - Person records as produced by a roster loader
//! - The fixed shift enumeration (day parts, periods, halves)
//! - Friend groups used by the pairing rule
//! - The error taxonomy for configuration, infeasibility and internal faults

pub mod domain;
pub mod error;

pub use domain::{
    DayPart, FriendGroup, Half, Period, Person, PersonId, ShiftIndex, DAY_PARTS, MAX_SHIFTS,
    SHIFTS_PER_DAY_PART,
};
pub use error::{Result, ShiftForgeError};
