use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use super::{RemoteSink, UploadError};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Realtime Database REST client
pub struct FirebaseSink {
    client: Client,
    base_url: String,
    secret: String,
}

impl FirebaseSink {
    pub fn new(
        base_url: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, UploadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(FirebaseSink {
            client,
            base_url: base_url.into(),
            secret: secret.into(),
        })
    }

    /// REST endpoint for a database path, e.g. `<base>/schedules.json`
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }

    /// Transport error text without the request URL, which carries the secret
    fn transport_error(&self, error: reqwest::Error) -> UploadError {
        let message = error.without_url().to_string();
        if self.secret.is_empty() {
            return UploadError::Transport(message);
        }
        UploadError::Transport(message.replace(&self.secret, "***"))
    }
}

impl RemoteSink for FirebaseSink {
    fn put(&self, path: &str, document: &serde_json::Value) -> Result<(), UploadError> {
        let endpoint = self.endpoint(path);
        debug!(%endpoint, "PUT");

        let response = self
            .client
            .put(&endpoint)
            .query(&[("auth", self.secret.as_str())])
            .json(document)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_joins_base_and_path() {
        let sink =
            FirebaseSink::new("https://pkkm-games-default-rtdb.firebaseio.com/", "s").unwrap();
        assert_eq!(
            sink.endpoint("/schedules/"),
            "https://pkkm-games-default-rtdb.firebaseio.com/schedules.json"
        );
    }

    #[test]
    fn refused_connection_does_not_leak_the_secret() {
        let sink = FirebaseSink::new("http://127.0.0.1:1", "TOPSECRET123").unwrap();
        let err = sink.put("schedules", &json!({})).unwrap_err();

        assert!(matches!(err, UploadError::Transport(_)));
        assert!(!err.to_string().contains("TOPSECRET123"));
    }
}
