//! Optional push of the exported document to the Realtime Database.
//!
//! Every failure on this path comes back as an [`UploadError`] for the caller
//! to report; nothing here aborts the process.

pub mod credentials;
#[cfg(feature = "firebase")]
pub mod firebase;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ImportConfig, UploadConfig};
use crate::display;
use crate::error::ImportError;
use crate::export::read_schedules;
use crate::schedule::ScheduleDocument;

pub use credentials::Credentials;

/// Remote location the schedules replace
pub const REMOTE_PATH: &str = "schedules";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("built without Realtime Database support (enable the `firebase` feature)")]
    ClientUnavailable,

    #[error("credential file not found: {}", .0.display())]
    MissingCredentials(PathBuf),

    #[error("invalid credential file {}: {reason}", .path.display())]
    InvalidCredentials { path: PathBuf, reason: String },

    #[error("no database URL: pass --database-url or set project_id in the credential file")]
    MissingDatabaseUrl,

    #[error("could not read schedule document: {0}")]
    Document(#[from] ImportError),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("database rejected the write ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A hierarchical key-value store that accepts whole documents
pub trait RemoteSink {
    /// Replaces everything under `path` with `document`
    fn put(&self, path: &str, document: &serde_json::Value) -> Result<(), UploadError>;
}

/// What the optional upload step did
#[derive(Debug)]
pub enum UploadStep {
    NotRequested,
    /// Requested, but the export failed so there was nothing current to send
    NotAttempted,
    Finished(Result<usize, UploadError>),
}

/// Sends a document's schedules to the sink, returning how many entries went up
pub fn push_document(
    document: &ScheduleDocument,
    sink: &dyn RemoteSink,
) -> Result<usize, UploadError> {
    let payload = serde_json::to_value(&document.schedules)
        .map_err(|e| UploadError::Transport(format!("could not encode schedules: {}", e)))?;
    sink.put(REMOTE_PATH, &payload)?;
    Ok(document.schedules.total_entries())
}

/// Reads the exported file back and uploads it with the configured client
pub fn upload_schedules(
    document_path: &Path,
    config: &UploadConfig,
) -> Result<usize, UploadError> {
    let document = read_schedules(document_path)?;
    let sink = connect(config)?;

    let total = push_document(&document, sink.as_ref())?;
    info!(path = REMOTE_PATH, entries = total, "Schedules uploaded");
    Ok(total)
}

/// Runs the upload if it was requested, reporting the outcome to the operator.
///
/// When the export failed the upload is skipped and the operator is told so.
pub fn run_upload_step(config: &ImportConfig, export_succeeded: bool) -> UploadStep {
    let Some(upload_config) = &config.upload else {
        return UploadStep::NotRequested;
    };

    if !export_succeeded {
        warn!("Upload not attempted: the export failed");
        display::print_upload_not_attempted(&config.output);
        return UploadStep::NotAttempted;
    }

    display::print_upload_start();
    let result = upload_schedules(&config.output, upload_config);
    match &result {
        Ok(total) => display::print_upload_done(*total),
        Err(e) => {
            warn!("Upload skipped: {}", e);
            display::print_upload_failed(e);
        }
    }
    UploadStep::Finished(result)
}

#[cfg(feature = "firebase")]
fn connect(config: &UploadConfig) -> Result<Box<dyn RemoteSink>, UploadError> {
    let credentials = Credentials::load(&config.credentials)?;
    let url = credentials.database_url(config.database_url.as_deref())?;
    let sink = firebase::FirebaseSink::new(url, credentials.database_secret)?;
    Ok(Box::new(sink))
}

#[cfg(not(feature = "firebase"))]
fn connect(_config: &UploadConfig) -> Result<Box<dyn RemoteSink>, UploadError> {
    Err(UploadError::ClientUnavailable)
}
