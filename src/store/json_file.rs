use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use crate::config::CONFIG;
use crate::error::PortalError;
use crate::store::RecordStore;

/// One `<key>.json` file per collection under a data directory. Reads that
/// fail for any reason behave as an absent key; writes create the directory
/// and overwrite the file whole.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            data_dir: data_dir.into(),
        }
    }

    /// Opens the store at the configured data directory (`PORTAL_DATA_DIR`).
    pub fn from_env() -> Self {
        Self::open(CONFIG.data_dir.clone())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl RecordStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(e) => {
                debug!("No readable '{}' collection: {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PortalError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| PortalError::Storage(e.to_string()))?;
        fs::write(self.path_for(key), value).map_err(|e| PortalError::Storage(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> Result<(), PortalError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!("Failed to remove '{}': {}", key, e);
                Err(PortalError::Storage(e.to_string()))
            }
        }
    }
}
