//! CSV export → [`GoalBook`].

use csv::{ReaderBuilder, StringRecord};
use goal_lookup_core::{Goal, GoalBook};

use crate::error::SourceError;

const NAME_COLUMN: &str = "name";
const DESCRIPTION_COLUMN: &str = "description";
const LEVEL_COLUMNS: [&str; 3] = ["level(s)", "levels", "level"];
const DIFFICULTY_COLUMN: &str = "difficulty";
const VIDEO_COLUMN: &str = "video link";

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    description: usize,
    levels: Option<usize>,
    difficulty: Option<usize>,
    video_link: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, SourceError> {
        let find = |wanted: &str| {
            headers.iter().position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };
        Ok(Self {
            name: find(NAME_COLUMN).ok_or(SourceError::MissingColumn("Name"))?,
            description: find(DESCRIPTION_COLUMN)
                .ok_or(SourceError::MissingColumn("Description"))?,
            levels: LEVEL_COLUMNS.iter().find_map(|c| find(*c)),
            difficulty: find(DIFFICULTY_COLUMN),
            video_link: find(VIDEO_COLUMN),
        })
    }
}

fn field(record: &StringRecord, index: Option<usize>) -> &str {
    index.and_then(|i| record.get(i)).unwrap_or("")
}

/// Parses the CSV document into a goal book.
///
/// Rows with a blank name or description are skipped. Any malformed row
/// fails the whole document.
///
/// # Errors
/// Returns [`SourceError::MissingColumn`] when the header lacks `Name` or
/// `Description`, and [`SourceError::Csv`] for malformed input.
pub fn parse_goals(text: &str) -> Result<GoalBook, SourceError> {
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut book = GoalBook::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let goal = Goal::from_row(
            field(&record, Some(columns.name)),
            field(&record, Some(columns.description)),
            field(&record, columns.levels),
            field(&record, columns.difficulty),
            field(&record, columns.video_link),
        );
        match goal {
            Some(goal) => {
                book.insert(goal);
            },
            None => skipped += 1,
        }
    }

    tracing::debug!(goals = book.len(), skipped, "parsed goal sheet");
    Ok(book)
}
