use crate::errors::MissionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, warn};

/// A flat string key-value store with atomic single-key writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), MissionError>;
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreData {
    pub entries: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MissionError> {
        self.data.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.data.entries.keys().cloned().collect()
    }
}

/// Keeps the whole map in memory and rewrites the backing file on every set.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    pub fn new(path: PathBuf, data: StoreData) -> Self {
        Self { path, data }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MissionError> {
        let mut next = self.data.clone();
        next.entries.insert(key.to_string(), value.to_string());
        persist_data(&self.path, &next)?;
        self.data = next;
        debug!(key, "persisted store entry");
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.data.entries.keys().cloned().collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawStoreData {
    #[serde(default)]
    entries: BTreeMap<String, serde_json::Value>,
}

/// Keeps every string entry. Entries with any other value are dropped one by
/// one; a file that does not parse at all is moved to `<path>.corrupt` so the
/// next write cannot overwrite it.
pub async fn load_data(path: &Path) -> StoreData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<RawStoreData>(&bytes) {
            Ok(raw) => {
                let mut data = StoreData::default();
                for (key, value) in raw.entries {
                    match value {
                        serde_json::Value::String(text) => {
                            data.entries.insert(key, text);
                        }
                        other => warn!(%key, "skipping non-string store entry: {other}"),
                    }
                }
                data
            }
            Err(err) => {
                let aside = sibling_path(path, ".corrupt");
                error!("failed to parse data file, moving it to {}: {err}", aside.display());
                if let Err(err) = fs::rename(path, &aside).await {
                    error!("failed to move unreadable data file aside: {err}");
                }
                StoreData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            StoreData::default()
        }
    }
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes to a sibling temp file and renames it over the target.
///
/// Blocking: the store is small and callers already hold the store lock for
/// the whole request.
pub fn persist_data(path: &Path, data: &StoreData) -> Result<(), MissionError> {
    let unavailable = |err: std::io::Error| MissionError::StoreUnavailable(err.to_string());
    let payload = serde_json::to_vec_pretty(data)
        .map_err(|err| MissionError::StoreUnavailable(err.to_string()))?;
    let tmp = sibling_path(path, ".tmp");
    std::fs::write(&tmp, payload).map_err(unavailable)?;
    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(unavailable(err));
    }
    Ok(())
}
