use crate::api::{DeskApi, DeskPaths};
use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::store::fs::FileStore;
use crate::upload::MockUploader;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, warn};

/// Environment variable naming the data directory.
pub const HOME_ENV: &str = "CAMPUSDESK_HOME";

pub struct DeskContext {
    pub api: DeskApi<FileStore, MockUploader>,
}

/// Picks the data directory: the explicit override, then `CAMPUSDESK_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(
    data_dir_override: Option<PathBuf>,
    env_home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }
    if let Some(dir) = env_home.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("edu", "campusdesk", "campusdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            DeskError::Store(format!(
                "Could not determine a data directory; set {} or pass --data-dir",
                HOME_ENV
            ))
        })
}

pub fn initialize(data_dir_override: Option<PathBuf>) -> Result<DeskContext> {
    let env_home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(data_dir_override, env_home)?;
    let paths = DeskPaths::new(data_dir);
    debug!(data_dir = %paths.data_dir.display(), "using data directory");

    let config = match DeskConfig::load(&paths.data_dir) {
        Ok(config) => config,
        Err(reason) => {
            warn!(%reason, "could not load config, using defaults");
            DeskConfig::default()
        }
    };

    let store = FileStore::new(paths.store_dir.clone()).with_quota(config.quota_bytes);
    let uploader = MockUploader::new(config.upload_delay());
    let api = DeskApi::new(Rc::new(store), uploader, paths, config);

    Ok(DeskContext { api })
}
