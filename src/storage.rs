use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub const APP_FOLDER_NAME: &str = "ExamHelper";
const STORE_FILE: &str = "store.json";

pub const COMPLETED_TOPICS_KEY: &str = "completedTopics";
pub const EXAM_DATE_KEY: &str = "examDate";

/// Small JSON key-value file standing in for browser local storage.
/// Every read tolerates a missing or corrupt file; every write is
/// synchronous and best-effort. Nothing here returns an error to callers.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn open_default() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read_map().remove(key)?;
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::warn!("[store] discarding unreadable value for {key}: {err}");
                None
            }
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let mut map = self.read_map();
        match serde_json::to_value(value) {
            Ok(encoded) => {
                map.insert(key.to_string(), encoded);
            }
            Err(err) => {
                log::warn!("[store] could not encode value for {key}: {err}");
                return;
            }
        }

        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("[store] could not create {}: {err}", parent.display());
                return;
            }
        }

        let json = match serde_json::to_string_pretty(&map) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("[store] could not encode store: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            log::warn!("[store] could not write {}: {err}", self.path.display());
        }
    }

    fn read_map(&self) -> BTreeMap<String, Value> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&contents) {
            Ok(map) => map,
            Err(err) => {
                log::warn!("[store] {} is corrupt, starting empty: {err}", self.path.display());
                BTreeMap::new()
            }
        }
    }
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER_NAME)
        .join(STORE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn scratch_store() -> LocalStore {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir()
            .join(format!("exam_helper_store_{}_{n}", std::process::id()))
            .join(STORE_FILE);
        LocalStore::at(path)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = scratch_store();
        assert_eq!(store.get::<Vec<String>>(COMPLETED_TOPICS_KEY), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = scratch_store();
        store.set(EXAM_DATE_KEY, &"2026-08-14".to_string());
        store.set(COMPLETED_TOPICS_KEY, &vec!["u1-t1".to_string()]);

        assert_eq!(
            store.get::<String>(EXAM_DATE_KEY).as_deref(),
            Some("2026-08-14")
        );
        assert_eq!(
            store.get::<Vec<String>>(COMPLETED_TOPICS_KEY),
            Some(vec!["u1-t1".to_string()])
        );
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let store = scratch_store();
        store.set(EXAM_DATE_KEY, &"2026-08-14".to_string());
        fs::write(&store.path, "{ not json").unwrap();
        assert_eq!(store.get::<String>(EXAM_DATE_KEY), None);
    }

    #[test]
    fn wrong_shape_value_reads_as_none() {
        let store = scratch_store();
        store.set(COMPLETED_TOPICS_KEY, &42);
        assert_eq!(store.get::<Vec<String>>(COMPLETED_TOPICS_KEY), None);
    }
}
