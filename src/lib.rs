pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod parser;
pub mod schedule;
pub mod sports;
pub mod upload;

pub use config::{ImportConfig, UploadConfig};
pub use error::{ImportError, Result};
pub use import::{collect_schedules, run_import, ImportRun, SportOutcome, SportStatus};
pub use schedule::{IdGenerator, Participants, ScheduleCollection, ScheduleDocument, ScheduleEntry};
pub use sports::{RecordShape, SportConfig, SPORTS};
