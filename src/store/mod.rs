use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PortalError;
use crate::models::Session;

pub mod in_memory;
pub mod json_file;

/// Collection keys. The names are the original store layout and must not
/// change without migrating persisted data.
pub const USERS: &str = "users";
pub const GRADES: &str = "grades";
pub const SCHEDULE: &str = "schedule";
pub const CURRENT_USER: &str = "currentUser";

/// Flat key-value persistence for the four collections. `set` fully
/// overwrites prior contents; there is no append primitive — callers
/// read-modify-write whole collections. No locking and no versioning: two
/// writers race and the last one wins, a deliberate boundary of the system.
pub trait RecordStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), PortalError>;
    fn remove(&mut self, key: &str) -> Result<(), PortalError>;
}

/// Loads a collection. Absent or malformed content degrades to an empty list
/// rather than surfacing an error.
pub fn load_collection<T: DeserializeOwned>(store: &dyn RecordStore, key: &str) -> Vec<T> {
    match store.get(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Collection '{}' is malformed, treating as empty: {}", key, e);
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

/// Serializes and fully overwrites a collection.
pub fn save_collection<T: Serialize>(
    store: &mut dyn RecordStore,
    key: &str,
    records: &[T],
) -> Result<(), PortalError> {
    let raw = serde_json::to_string(records).map_err(|e| PortalError::Storage(e.to_string()))?;
    store.set(key, raw)
}

/// Reads the persisted session verbatim. Content that does not parse as a
/// session — including an unknown role value — is treated as absent.
pub fn load_session(store: &dyn RecordStore) -> Option<Session> {
    let raw = store.get(CURRENT_USER)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!("Persisted session is malformed, ignoring: {}", e);
            None
        }
    }
}

pub fn save_session(store: &mut dyn RecordStore, session: &Session) -> Result<(), PortalError> {
    let raw = serde_json::to_string(session).map_err(|e| PortalError::Storage(e.to_string()))?;
    store.set(CURRENT_USER, raw)
}

pub fn clear_session(store: &mut dyn RecordStore) -> Result<(), PortalError> {
    store.remove(CURRENT_USER)
}
