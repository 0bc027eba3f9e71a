//! Portal configuration, read from a RON file and overridden from the CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobboard_engine::CatalogSettings;
use portal_logging::portal_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub logo_base_url: String,
    pub list_path: String,
    pub detail_path: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        let settings = CatalogSettings::default();
        Self {
            api_base_url: settings.api_base_url,
            logo_base_url: settings.logo_base_url,
            list_path: settings.list_path,
            detail_path: settings.detail_path,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            max_response_bytes: settings.max_bytes,
        }
    }
}

impl PortalConfig {
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            api_base_url: self.api_base_url.clone(),
            logo_base_url: self.logo_base_url.clone(),
            list_path: self.list_path.clone(),
            detail_path: self.detail_path.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        }
    }
}

/// Loads the config file; a missing file means defaults.
pub fn load_config(path: &Path) -> Result<PortalConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            portal_info!("no config at {:?}; using defaults", path);
            return Ok(PortalConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    portal_info!("loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.list_path, "JobPortal/list_jobs");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portal.ron");
        fs::write(
            &path,
            r#"(api_base_url: "http://localhost:8080/api/", request_timeout_secs: 5)"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api/");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.detail_path, "Job_post");

        let settings = config.catalog_settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.max_bytes, PortalConfig::default().max_response_bytes);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(api_base_url: ").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
