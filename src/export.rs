use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::schedule::{ScheduleCollection, ScheduleDocument};

/// Default name of the exported document
pub const DEFAULT_OUTPUT_FILE: &str = "schedules.json";

/// Writes `{"schedules": ...}` as indented UTF-8 JSON, replacing any existing file
pub fn write_schedules(schedules: &ScheduleCollection, output_path: &Path) -> Result<()> {
    #[derive(serde::Serialize)]
    struct DocumentRef<'a> {
        schedules: &'a ScheduleCollection,
    }

    let file = File::create(output_path).map_err(|e| ImportError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &DocumentRef { schedules })
        .map_err(|e| ImportError::json(output_path, e))?;
    writer.flush().map_err(|e| ImportError::io(output_path, e))?;

    Ok(())
}

/// Reads a previously exported document
pub fn read_schedules(path: &Path) -> Result<ScheduleDocument> {
    let file = File::open(path).map_err(|e| ImportError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ImportError::json(path, e))
}
