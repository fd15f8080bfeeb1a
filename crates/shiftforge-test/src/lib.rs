//! Shared test fixtures for ShiftForge crates.
//!
//! - [`people`] - roster builders
//! - [`check`] - independent checks of a solved roster against every rule
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! shiftforge-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use shiftforge_test::people::alternating_veterans;
//! use shiftforge_test::check::assert_valid_roster;
//! ```

pub mod check;
pub mod people;

pub use check::{assert_valid_roster, violations, Violation};
pub use people::{alternating_veterans, everyone_available, paired_roster, single_shift_roster};
