//! Plain-text rendering of the roster and the solve result.

use std::fmt;

use shiftforge_core::Person;
use shiftforge_solver::{SolveOutcome, SolveResult};

/// Lists the people as loaded, one per line.
///
/// ```
/// use shiftforge::report::PeopleReport;
/// use shiftforge::Person;
///
/// let people = vec![Person::new(0, "Ada").with_contact("ada@example.com").available_on([0, 1])];
/// assert_eq!(
///     PeopleReport(&people).to_string(),
///     "1 people\n0 is ada@example.com unsplit {0, 1}\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PeopleReport<'a>(pub &'a [Person]);

impl fmt::Display for PeopleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} people", self.0.len())?;
        for person in self.0 {
            let split = if person.split_preference { "split" } else { "unsplit" };
            let shifts: Vec<String> = person.availability.iter().map(|s| s.to_string()).collect();
            writeln!(
                f,
                "{} is {} {} {{{}}}",
                person.id,
                person.contact,
                split,
                shifts.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Solve summary followed by one `"{shift} {slot} {name}"` line per
/// assignment.
#[derive(Debug, Clone, Copy)]
pub struct RosterReport<'a> {
    people: &'a [Person],
    result: &'a SolveResult,
}

impl<'a> RosterReport<'a> {
    pub fn new(people: &'a [Person], result: &'a SolveResult) -> Self {
        Self { people, result }
    }
}

impl fmt::Display for RosterReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = usize::from(self.result.is_success());
        writeln!(f, "Solutions found: {}", found)?;
        writeln!(f, "Time: {} ms", self.result.duration.as_millis())?;

        match &self.result.outcome {
            SolveOutcome::Solved(roster) => {
                for (shift, slot, person) in roster.assignments() {
                    let name = self
                        .people
                        .get(person.0)
                        .map_or("?", |p| p.name.as_str());
                    writeln!(f, "{} {} {}", shift, slot, name)?;
                }
            }
            SolveOutcome::Infeasible => writeln!(f, "No roster satisfies every rule")?,
            SolveOutcome::Aborted(reason) => {
                writeln!(f, "Search stopped before a roster was found: {}", reason)?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve, ScheduleConfig};
    use shiftforge_test::people::{paired_roster, single_shift_roster};

    #[test]
    fn test_report_lists_assignments() {
        let people = paired_roster();
        let result = solve(&people, &ScheduleConfig::new()).unwrap();
        let text = RosterReport::new(&people, &result).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Solutions found: 1");
        assert!(lines[1].starts_with("Time: "));
        assert!(lines[1].ends_with(" ms"));
        assert_eq!(&lines[2..6], &["0 0 P0", "0 1 P6", "1 0 P0", "1 1 P6"]);
        assert_eq!(lines.len(), 2 + 24);
    }

    #[test]
    fn test_report_infeasible() {
        let people = single_shift_roster(4, 0..4);
        let config = ScheduleConfig::new().with_shift_size(1);
        let result = solve(&people, &config).unwrap();
        let text = RosterReport::new(&people, &result).to_string();
        assert!(text.starts_with("Solutions found: 0\n"));
        assert!(text.ends_with("No roster satisfies every rule\n"));
    }

    #[test]
    fn test_people_report_marks_split() {
        let people = vec![Person::new(0, "Ada")
            .with_contact("ada@example.com")
            .with_split_preference(true)];
        assert_eq!(
            PeopleReport(&people).to_string(),
            "1 people\n0 is ada@example.com split {}\n"
        );
    }
}
