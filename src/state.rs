use crate::storage::KvStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub kv: Arc<Mutex<KvStore>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, kv: KvStore) -> Self {
        Self {
            data_path,
            kv: Arc::new(Mutex::new(kv)),
        }
    }
}
