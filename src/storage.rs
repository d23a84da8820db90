//! JSON-file key-value store. Every user collection lives under a
//! `kind:userId` composite key as its own JSON blob; the whole map is
//! rewritten on each mutation.

use crate::errors::AppError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KvStore {
    pub blobs: BTreeMap<String, serde_json::Value>,
}

impl KvStore {
    pub fn key(kind: &str, user_id: &str) -> String {
        format!("{kind}:{user_id}")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.contains_key(key)
    }

    /// Reads a blob as `T`. A missing key or an undecodable blob both read
    /// as `None`; decode failures are logged, not fatal.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.blobs.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                error!("undecodable blob at {key}: {err}");
                None
            }
        }
    }

    pub fn set_as<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), AppError> {
        let encoded = serde_json::to_value(value)?;
        self.blobs.insert(key.to_string(), encoded);
        Ok(())
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/store.json"))
}

pub async fn load_store(path: &Path) -> KvStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file: {err}");
                KvStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => KvStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            KvStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &KvStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HydrationLog, NutritionGoals};

    #[test]
    fn composite_keys_partition_by_kind_and_user() {
        assert_eq!(KvStore::key("nutrition", "u1"), "nutrition:u1");
        assert_ne!(KvStore::key("nutrition", "u1"), KvStore::key("hydration", "u1"));
        assert_ne!(KvStore::key("nutrition", "u1"), KvStore::key("nutrition", "u2"));
    }

    #[test]
    fn round_trips_typed_blobs() {
        let mut store = KvStore::default();
        let goals = NutritionGoals::default();
        store
            .set_as(&KvStore::key("profile", "u1"), &goals)
            .expect("serializable");

        let read: NutritionGoals = store
            .get_as(&KvStore::key("profile", "u1"))
            .expect("present");
        assert_eq!(read.calories, goals.calories);
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = KvStore::default();
        let read: Option<HydrationLog> = store.get_as("hydration:nobody");
        assert!(read.is_none());
    }

    #[test]
    fn mismatched_blob_reads_as_none() {
        let mut store = KvStore::default();
        store
            .blobs
            .insert("profile:u1".to_string(), serde_json::json!("not a profile"));
        let read: Option<NutritionGoals> = store.get_as("profile:u1");
        assert!(read.is_none());
    }
}
