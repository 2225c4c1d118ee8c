//! Configuration loading
//!
//! Settings come from `config.toml` under the platform config directory,
//! with command-line flags taking precedence over file values.

mod types;

use std::path::{Path, PathBuf};

use crate::error::SnapqError;

pub use types::{Config, FileConfig, SearchConfig, SearchSection, ServiceConfig, ServiceSection};

/// Hosted endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub project: Option<String>,
    pub database_id: Option<String>,
    pub post_collection_id: Option<String>,
    pub other_collection_ids: Vec<String>,
    pub api_key: Option<String>,
    pub debounce_ms: Option<u64>,
}

/// Default config file location: `<config dir>/snapq/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("snapq").join("config.toml"))
}

/// Parse a config file from disk
///
/// A missing file is not an error; it yields the all-default `FileConfig`.
pub fn load_file(path: &Path) -> Result<FileConfig, SnapqError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(e) => {
            return Err(SnapqError::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    toml::from_str(&contents).map_err(|e| SnapqError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Merge file values and overrides into a validated runtime config
pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Config, SnapqError> {
    let endpoint = overrides
        .endpoint
        .or(file.service.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let project = overrides
        .project
        .or(file.service.project)
        .filter(|p| !p.trim().is_empty())
        .ok_or(SnapqError::MissingSetting("service.project"))?;

    let database_id = overrides
        .database_id
        .or(file.service.database_id)
        .filter(|d| !d.trim().is_empty())
        .ok_or(SnapqError::MissingSetting("service.database_id"))?;

    let post_collection_id = overrides
        .post_collection_id
        .or(file.service.post_collection_id)
        .filter(|c| !c.trim().is_empty())
        .ok_or(SnapqError::MissingSetting("service.post_collection_id"))?;

    // Flags replace the file list wholesale when given
    let other_collection_ids = if overrides.other_collection_ids.is_empty() {
        file.service.other_collection_ids
    } else {
        overrides.other_collection_ids
    };

    let api_key = overrides.api_key.or(file.service.api_key);

    Ok(Config {
        service: ServiceConfig {
            endpoint,
            project,
            database_id,
            post_collection_id,
            other_collection_ids,
            api_key,
        },
        search: SearchConfig {
            debounce_ms: overrides.debounce_ms.unwrap_or(file.search.debounce_ms),
            suggestion_limit: file.search.suggestion_limit,
        },
    })
}

/// Load config from an explicit path or the default location
pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Config, SnapqError> {
    let file = match path {
        Some(path) => load_file(path)?,
        None => match default_config_path() {
            Some(path) => load_file(&path)?,
            None => FileConfig::default(),
        },
    };
    resolve(file, overrides)
}
