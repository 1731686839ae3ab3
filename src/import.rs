use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::ImportConfig;
use crate::display;
use crate::error::Result;
use crate::export::write_schedules;
use crate::parser::load_schedule;
use crate::schedule::{IdGenerator, ScheduleCollection};
use crate::sports::SportConfig;

/// What happened to one sport during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SportStatus {
    Loaded(usize),
    /// No source file at the expected path
    Missing,
    /// File present but without any complete fixture
    NoEntries,
    /// File present but unreadable
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportOutcome {
    pub sport: &'static str,
    pub source: PathBuf,
    pub status: SportStatus,
}

/// Result of parsing every configured sport
#[derive(Debug, Clone, Default)]
pub struct ImportRun {
    pub schedules: ScheduleCollection,
    pub outcomes: Vec<SportOutcome>,
}

impl ImportRun {
    pub fn total_entries(&self) -> usize {
        self.schedules.total_entries()
    }

    pub fn has_entries(&self) -> bool {
        !self.schedules.is_empty()
    }
}

/// Parses every sport in table order, keeping the ones that produced entries.
///
/// Per-sport failures are reported and the run moves on.
pub fn collect_schedules<G: Rng>(
    sports: &[SportConfig],
    input_dir: &Path,
    ids: &mut IdGenerator<G>,
) -> ImportRun {
    let mut run = ImportRun::default();

    for sport in sports {
        let source = input_dir.join(sport.source_file);
        display::print_processing(sport.id);

        let status = match load_schedule(&source, sport.id, sport.shape, ids) {
            Ok(None) => SportStatus::Missing,
            Ok(Some(entries)) if entries.is_empty() => SportStatus::NoEntries,
            Ok(Some(entries)) => {
                for entry in &entries {
                    let line = display::format_entry(entry);
                    debug!(sport = sport.id, id = entry.id, "{}", line);
                }
                let count = entries.len();
                run.schedules.insert(sport.id, entries);
                SportStatus::Loaded(count)
            }
            Err(e) => {
                warn!(sport = sport.id, "Skipping sport: {}", e);
                SportStatus::Failed(e.to_string())
            }
        };

        let outcome = SportOutcome {
            sport: sport.id,
            source,
            status,
        };
        display::print_sport_result(&outcome);
        run.outcomes.push(outcome);
    }

    run
}

/// Runs the conversion: parse all sports, then write the document if anything was found.
///
/// Finding nothing is reported but is not an error. Only a failed write is.
pub fn run_import<G: Rng>(
    config: &ImportConfig,
    sports: &[SportConfig],
    ids: &mut IdGenerator<G>,
) -> Result<ImportRun> {
    info!(input_dir = %config.input_dir.display(), "Collecting schedules");
    let run = collect_schedules(sports, &config.input_dir, ids);

    display::print_section_break();
    if !run.has_entries() {
        warn!("No schedules found in any source file");
        display::print_no_schedules(&config.input_dir);
        return Ok(run);
    }

    write_schedules(&run.schedules, &config.output)?;
    info!(
        output = %config.output.display(),
        sports = run.schedules.len(),
        entries = run.total_entries(),
        "Schedules exported"
    );
    display::print_exported(&config.output, run.total_entries());
    if config.upload.is_none() {
        display::print_next_steps(&config.output);
    }

    Ok(run)
}
