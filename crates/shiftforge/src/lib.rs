//! ShiftForge - Volunteer Shift Rosters in Rust
//!
//! Load the sign-up sheet, pick a configuration, solve, print.
//!
//! # Example
//!
//! ```rust
//! use shiftforge::prelude::*;
//!
//! let sheet = "\
//! t,ada@example.com,Ada,Yes,One,Early,,
//! t,brook@example.com,Brook,No,Two,Early,,
//! ";
//! let people = shiftforge::roster::parse_roster(sheet.as_bytes()).unwrap();
//! let config = ScheduleConfig::new().with_num_shifts(2);
//!
//! let result = solve(&people, &config).unwrap();
//! let roster = result.roster().unwrap();
//! assert_eq!(roster.workers(ShiftIndex(0)), &[PersonId(0), PersonId(1)]);
//! ```

pub use shiftforge_config::{
    ConfigError, ModelVariant, ScheduleConfig, ShiftCap, TerminationConfig,
};
pub use shiftforge_core::{
    DayPart, FriendGroup, Half, Period, Person, PersonId, Result, ShiftForgeError, ShiftIndex,
    MAX_SHIFTS,
};
pub use shiftforge_solver::{
    solve, Model, Roster, SearchStats, SolveOutcome, SolveResult, Solver, TerminationReason,
};

#[cfg(feature = "console")]
pub mod console;
pub mod report;
pub mod roster;

pub mod prelude {
    pub use super::{
        FriendGroup, ModelVariant, Person, PersonId, Roster, ScheduleConfig, ShiftCap,
        ShiftIndex, SolveOutcome, SolveResult, Solver,
    };
    pub use super::solve;
}
