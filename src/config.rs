use std::path::PathBuf;

use crate::export::DEFAULT_OUTPUT_FILE;

/// Default credential file for the upload step
pub const DEFAULT_CREDENTIALS_FILE: &str = "serviceAccountKey.json";

/// Settings for one import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Directory holding the per-sport CSV files
    pub input_dir: PathBuf,
    /// Where the JSON document is written
    pub output: PathBuf,
    /// Present only when the upload step was requested
    pub upload: Option<UploadConfig>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            input_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            upload: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub credentials: PathBuf,
    /// Overrides the URL derived from the credential file
    pub database_url: Option<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            credentials: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            database_url: None,
        }
    }
}
