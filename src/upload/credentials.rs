use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::UploadError;

/// Credential material for the Realtime Database REST API
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Database secret sent as the `auth` query parameter
    pub database_secret: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub database_url: Option<String>,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self, UploadError> {
        if !path.exists() {
            return Err(UploadError::MissingCredentials(path.to_path_buf()));
        }

        let invalid = |reason: String| UploadError::InvalidCredentials {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let credentials: Credentials =
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

        if credentials.database_secret.trim().is_empty() {
            return Err(invalid("database_secret is empty".to_string()));
        }
        Ok(credentials)
    }

    /// Picks the database URL: explicit override, then the file's own URL,
    /// then the default instance of the project.
    pub fn database_url(&self, explicit: Option<&str>) -> Result<String, UploadError> {
        let non_blank = |s: &&str| !s.trim().is_empty();

        if let Some(url) = explicit.filter(non_blank) {
            return Ok(url.trim().trim_end_matches('/').to_string());
        }
        if let Some(url) = self.database_url.as_deref().filter(non_blank) {
            return Ok(url.trim().trim_end_matches('/').to_string());
        }
        match self.project_id.as_deref().filter(non_blank) {
            Some(project) => Ok(format!("https://{}-default-rtdb.firebaseio.com", project.trim())),
            None => Err(UploadError::MissingDatabaseUrl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(project_id: Option<&str>, database_url: Option<&str>) -> Credentials {
        Credentials {
            database_secret: "s3cret".to_string(),
            project_id: project_id.map(str::to_string),
            database_url: database_url.map(str::to_string),
        }
    }

    #[test]
    fn url_prefers_explicit_then_file_then_project() {
        let creds = credentials(Some("pkkm-games"), Some("https://custom.example.com/"));
        assert_eq!(
            creds.database_url(Some("https://override.example.com/")).unwrap(),
            "https://override.example.com"
        );
        assert_eq!(creds.database_url(None).unwrap(), "https://custom.example.com");

        let creds = credentials(Some("pkkm-games"), None);
        assert_eq!(
            creds.database_url(Some("  ")).unwrap(),
            "https://pkkm-games-default-rtdb.firebaseio.com"
        );
    }

    #[test]
    fn no_way_to_find_the_database() {
        let err = credentials(None, None).database_url(None).unwrap_err();
        assert!(matches!(err, UploadError::MissingDatabaseUrl));
    }

    #[test]
    fn load_reports_missing_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serviceAccountKey.json");
        assert!(matches!(Credentials::load(&path), Err(UploadError::MissingCredentials(_))));

        fs::write(&path, r#"{"project_id": "pkkm-games"}"#).unwrap();
        assert!(matches!(Credentials::load(&path), Err(UploadError::InvalidCredentials { .. })));

        fs::write(&path, r#"{"database_secret": " ", "project_id": "pkkm-games"}"#).unwrap();
        assert!(matches!(Credentials::load(&path), Err(UploadError::InvalidCredentials { .. })));
    }

    #[test]
    fn load_ignores_unrelated_service_account_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serviceAccountKey.json");
        fs::write(
            &path,
            r#"{
                "type": "service_account",
                "project_id": "pkkm-games",
                "client_email": "x@y",
                "database_secret": "abc"
            }"#,
        )
        .unwrap();

        let creds = Credentials::load(&path).unwrap();
        assert_eq!(creds.database_secret, "abc");
        assert_eq!(creds.project_id.as_deref(), Some("pkkm-games"));
    }
}
