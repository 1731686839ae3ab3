use csv::{ReaderBuilder, StringRecord};
use rand::Rng;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{ImportError, Result};
use crate::schedule::{IdGenerator, Participants, ScheduleEntry};
use crate::sports::RecordShape;

/// Column positions resolved from the header row
#[derive(Debug, Default)]
struct Columns {
    round: Option<usize>,
    time: Option<usize>,
    venue: Option<usize>,
    notes: Option<usize>,
    first: Option<usize>,
    second: Option<usize>,
}

/// Strips a byte-order mark and padding from a header cell
fn clean_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

impl Columns {
    fn resolve(headers: &StringRecord, shape: RecordShape) -> Self {
        let names: Vec<&str> = headers.iter().map(clean_header).collect();
        // Repeated headers: the last one wins
        let find = |name: &str| names.iter().rposition(|h| *h == name);

        let (first, second) = shape.participant_columns();
        Columns {
            round: find("Round"),
            time: find("Time"),
            venue: find("Venue"),
            notes: find("Notes"),
            first: find(first),
            second: find(second),
        }
    }
}

/// Trimmed cell text; missing columns and short rows read as blank
fn field(record: &StringRecord, column: Option<usize>) -> &str {
    column
        .and_then(|idx| record.get(idx))
        .unwrap_or("")
        .trim()
}

/// Trimmed cell text, or `None` when blank
fn optional_field(record: &StringRecord, column: Option<usize>) -> Option<String> {
    let value = field(record, column);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_blank_row(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

/// Parses schedule rows from any CSV source.
///
/// Blank rows and rows with a missing participant are skipped. Kept rows get
/// an id from `ids` in source order.
pub fn read_schedule<S: Read, G: Rng>(
    source: S,
    sport: &str,
    shape: RecordShape,
    ids: &mut IdGenerator<G>,
) -> std::result::Result<Vec<ScheduleEntry>, csv::Error> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);
    let columns = Columns::resolve(reader.headers()?, shape);

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;

        if is_blank_row(&record) {
            continue;
        }

        let first = field(&record, columns.first);
        let second = field(&record, columns.second);
        let Some(participants) = Participants::for_shape(shape, first, second) else {
            debug!(
                sport,
                line = record.position().map(|p| p.line()),
                "Skipping row without both participants"
            );
            continue;
        };

        entries.push(ScheduleEntry {
            id: ids.next_id(),
            round: field(&record, columns.round).to_string(),
            time: field(&record, columns.time).to_string(),
            venue: optional_field(&record, columns.venue),
            notes: optional_field(&record, columns.notes),
            participants,
        });
    }

    Ok(entries)
}

/// Loads one sport's schedule file.
///
/// A missing file is not an error: it is logged and yields `None`.
pub fn load_schedule<P: AsRef<Path>, G: Rng>(
    path: P,
    sport: &str,
    shape: RecordShape,
    ids: &mut IdGenerator<G>,
) -> Result<Option<Vec<ScheduleEntry>>> {
    let path = path.as_ref();

    if !path.exists() {
        warn!(sport, "File not found: {}", path.display());
        return Ok(None);
    }

    let file = std::fs::File::open(path).map_err(|e| ImportError::io(path, e))?;
    read_schedule(file, sport, shape, ids)
        .map(Some)
        .map_err(|e| ImportError::csv(path, e))
}
