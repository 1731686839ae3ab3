use std::path::Path;

use crate::import::{SportOutcome, SportStatus};
use crate::schedule::ScheduleEntry;
use crate::upload::UploadError;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Formats a fixture as "<side> vs <side>"
pub fn format_fixture(entry: &ScheduleEntry) -> String {
    let (first, second) = entry.participants.sides();
    format!("{} vs {}", first, second)
}

/// One-line summary of an entry for debug listings
pub fn format_entry(entry: &ScheduleEntry) -> String {
    let mut line = format!("[{}] {}", entry.round, format_fixture(entry));
    if !entry.time.is_empty() {
        line.push_str(&format!(" @ {}", entry.time));
    }
    if let Some(venue) = &entry.venue {
        line.push_str(&format!(" ({})", venue));
    }
    line
}

pub fn print_banner() {
    println!("🏆 Event Manager - Schedule Import");
    println!("{}", rule());
}

pub fn print_processing(sport: &str) {
    println!("\n📋 Processing {}...", sport);
}

pub fn print_sport_result(outcome: &SportOutcome) {
    match &outcome.status {
        SportStatus::Loaded(count) => println!("   ✓ Added {} schedule(s)", count),
        SportStatus::Missing => {
            println!("   ⚠️  File not found: {}", outcome.source.display());
            println!("   ⚠️  No schedules found");
        }
        SportStatus::NoEntries => println!("   ⚠️  No schedules found"),
        SportStatus::Failed(reason) => {
            println!(
                "   ⚠️  No schedules found (could not read {})",
                outcome.source.display()
            );
            println!("      {}", reason);
        }
    }
}

pub fn print_section_break() {
    println!("\n{}", rule());
}

pub fn print_exported(output: &Path, total: usize) {
    println!("✅ Exported to {}", output.display());
    println!("\n✅ Total schedules processed: {}", total);
}

/// Manual import steps for operators who do not use `--upload`
pub fn print_next_steps(output: &Path) {
    let file_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());

    println!("\n📤 Next Steps:");
    println!("1. Open the Firebase Console → Realtime Database");
    println!("2. Open the ⋮ menu → Import JSON");
    println!("3. Select '{}'", file_name);
    println!("4. Confirm the import");
}

pub fn print_no_schedules(input_dir: &Path) {
    println!("❌ No schedules found in any CSV file");
    println!("\nMake sure that:");
    println!("- the CSV files are in {}", input_dir.display());
    println!("- the schedule rows are filled in");
    println!("- the files have been saved");
}

pub fn print_upload_start() {
    println!("\n{}", rule());
    println!("🔥 Uploading to the Realtime Database...");
}

pub fn print_upload_not_attempted(output: &Path) {
    println!("\n{}", rule());
    println!("⚠️  Upload not attempted: {} could not be written", output.display());
}

pub fn print_upload_done(total: usize) {
    println!("✅ Uploaded {} schedule(s) to the Realtime Database", total);
}

/// Reports an upload failure along with what the operator can do about it
pub fn print_upload_failed(error: &UploadError) {
    match error {
        UploadError::ClientUnavailable => {
            println!("⚠️  Realtime Database upload is not available in this build");
            println!("Rebuild with: cargo build --release --features firebase");
        }
        UploadError::MissingCredentials(path) => {
            println!("⚠️  {} not found", path.display());
            println!("Create it from Firebase Console → Project Settings → Service Accounts");
            println!("(Database secrets section)");
        }
        other => println!("❌ Error uploading to the Realtime Database: {}", other),
    }
}
