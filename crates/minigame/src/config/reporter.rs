use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http;
use crate::error::{Error, Result};

/// Score submission settings.
///
/// Read from the `[server]` table of a TOML file:
///
/// ```toml
/// [server]
/// base_url = "https://example.com"
/// application_id = 42
/// csrf_token = "..."
/// session_cookie = "session=..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    pub base_url: String,
    pub application_id: Option<u64>,
    pub csrf_token: Option<String>,
    pub session_cookie: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            base_url: http::DEFAULT_BASE_URL.to_string(),
            application_id: None,
            csrf_token: None,
            session_cookie: None,
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ReporterConfig,
}

impl ReporterConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded reporter config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        file.server.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Empty tokens are treated as absent, like a missing `<meta>` tag.
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_server_table_missing() {
        let config = ReporterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ReporterConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_full_table() {
        let config = ReporterConfig::from_toml_str(
            r#"
            [server]
            base_url = "https://games.example"
            application_id = 7
            csrf_token = "abc"
            session_cookie = "session=xyz"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://games.example");
        assert_eq!(config.application_id, Some(7));
        assert_eq!(config.csrf_token(), Some("abc"));
        assert_eq!(config.session_cookie.as_deref(), Some("session=xyz"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let config = ReporterConfig::from_toml_str("[server]\ncsrf_token = \"\"\n").unwrap();
        assert_eq!(config.csrf_token(), None);
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = ReporterConfig::from_toml_str("[server]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ReporterConfig::from_toml_str("[server\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\napplication_id = 3\n").unwrap();
        let config = ReporterConfig::load(&path).unwrap();
        assert_eq!(config.application_id, Some(3));
    }
}
