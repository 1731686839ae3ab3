use clap::Parser;
use std::path::PathBuf;

use schedule_import::config::{ImportConfig, UploadConfig, DEFAULT_CREDENTIALS_FILE};
use schedule_import::export::DEFAULT_OUTPUT_FILE;

#[derive(Parser, Debug)]
#[command(name = "schedule-import")]
#[command(
    about = "Converts the per-sport schedule CSVs into one JSON document for the event database"
)]
#[command(version)]
pub struct Cli {
    /// Directory containing the Schedule_Template_*.csv files
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Where to write the JSON document
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Upload the document to the Realtime Database after exporting
    #[arg(long)]
    pub upload: bool,

    /// Credential file used by --upload
    #[arg(long, default_value = DEFAULT_CREDENTIALS_FILE)]
    pub credentials: PathBuf,

    /// Realtime Database URL, e.g. https://<project>-default-rtdb.firebaseio.com
    #[arg(long, requires = "upload")]
    pub database_url: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> ImportConfig {
        let upload = self.upload.then(|| UploadConfig {
            credentials: self.credentials,
            database_url: self.database_url,
        });

        ImportConfig {
            input_dir: self.input_dir,
            output: self.output,
            upload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_matches_defaults() {
        let config = Cli::parse_from(["schedule-import"]).into_config();
        assert_eq!(config, ImportConfig::default());
    }

    #[test]
    fn upload_flags_build_an_upload_config() {
        let config = Cli::parse_from([
            "schedule-import",
            "--input-dir",
            "sheets",
            "--upload",
            "--database-url",
            "https://pkkm-default-rtdb.firebaseio.com",
        ])
        .into_config();

        assert_eq!(config.input_dir, PathBuf::from("sheets"));
        let upload = config.upload.unwrap();
        assert_eq!(upload.credentials, PathBuf::from(DEFAULT_CREDENTIALS_FILE));
        assert_eq!(
            upload.database_url.as_deref(),
            Some("https://pkkm-default-rtdb.firebaseio.com")
        );
    }

    #[test]
    fn database_url_needs_upload() {
        assert!(Cli::try_parse_from(["schedule-import", "--database-url", "https://x"]).is_err());
    }
}
