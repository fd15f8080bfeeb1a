//! Sign-up sheet loader.
//!
//! The sheet is a header-less CSV export of a sign-up form, one person per
//! row in order of appearance:
//!
//! | Column | Answer |
//! |--------|--------|
//! | 0 | submission time (ignored) |
//! | 1 | e-mail |
//! | 2 | name |
//! | 3 | veteran? (`Yes` marks a veteran) |
//! | 4 | block preference (`One` = one continuous block; anything else = willing to split) |
//! | 5..=7 | availability per day part (`Early`, `Late`, both or neither) |

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use shiftforge_core::{DayPart, Period, Person};
use thiserror::Error;
use tracing::debug;

/// Columns a row must have.
pub const COLUMNS: usize = 8;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected {} columns, found {found}", COLUMNS)]
    MissingColumn { line: u64, found: usize },
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    _submitted: String,
    contact: String,
    name: String,
    veteran: String,
    block: String,
    first_day_part: String,
    second_day_part: String,
    third_day_part: String,
}

impl ResponseRow {
    fn into_person(self, id: usize) -> Person {
        let split = !self.block.is_empty() && !self.block.contains("One");
        let mut person = Person::new(id, self.name)
            .with_contact(self.contact)
            .with_veteran(self.veteran.contains("Yes"))
            .with_split_preference(split);
        let answers = [
            &self.first_day_part,
            &self.second_day_part,
            &self.third_day_part,
        ];
        for (day_part, answer) in DayPart::all().zip(answers) {
            if answer.contains("Early") {
                person = person.available_in(day_part, Period::Early);
            }
            if answer.contains("Late") {
                person = person.available_in(day_part, Period::Late);
            }
        }
        person
    }
}

/// Reads people from a sign-up sheet.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<Person>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut people = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() < COLUMNS {
            let line = record.position().map_or(0, |p| p.line());
            return Err(RosterError::MissingColumn {
                line,
                found: record.len(),
            });
        }
        let row: ResponseRow = record.deserialize(None)?;
        people.push(row.into_person(people.len()));
    }

    debug!(
        event = "roster_loaded",
        people = people.len(),
        veterans = people.iter().filter(|p| p.veteran).count(),
    );
    Ok(people)
}

/// Reads people from a sign-up sheet on disk.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Person>, RosterError> {
    let file = File::open(path)?;
    parse_roster(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftforge_core::{PersonId, ShiftIndex};

    const SHEET: &str = "\
2024/01/01,ada@example.com,Ada,Yes,One block,Early,Early and Late,
2024/01/01,brook@example.com,Brook,No,Two halves,,Late,Early
2024/01/02, cy@example.com , Cy ,No,,Late,,Late
";

    fn shifts(person: &Person) -> Vec<usize> {
        person.availability.iter().map(|s| s.0).collect()
    }

    #[test]
    fn test_parse_roster() {
        let people = parse_roster(SHEET.as_bytes()).unwrap();
        assert_eq!(people.len(), 3);

        let ada = &people[0];
        assert_eq!(ada.id, PersonId(0));
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.contact, "ada@example.com");
        assert!(ada.veteran);
        assert!(!ada.split_preference);
        assert_eq!(shifts(ada), vec![0, 1, 4, 5, 6, 7]);

        let brook = &people[1];
        assert!(!brook.veteran);
        assert!(brook.split_preference);
        assert_eq!(shifts(brook), vec![6, 7, 8, 9]);
        assert!(brook.is_available(ShiftIndex(8)));
    }

    #[test]
    fn test_trims_cells_and_blank_block_is_not_split() {
        let people = parse_roster(SHEET.as_bytes()).unwrap();
        let cy = &people[2];
        assert_eq!(cy.name, "Cy");
        assert_eq!(cy.contact, "cy@example.com");
        assert!(!cy.split_preference);
        assert_eq!(shifts(cy), vec![2, 3, 10, 11]);
    }

    #[test]
    fn test_short_row_is_missing_column() {
        let sheet = "t,a@example.com,A,Yes,One,Early,,\nt,b@example.com,B,No\n";
        match parse_roster(sheet.as_bytes()) {
            Err(RosterError::MissingColumn { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 4);
            }
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sheet() {
        assert!(parse_roster("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_roster("/nonexistent/responses.csv"),
            Err(RosterError::Io(_))
        ));
    }
}
