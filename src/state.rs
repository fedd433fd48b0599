use crate::catalogue::Catalogue;
use crate::records::RecordStore;
use crate::storage::{JsonFileStore, StoreData};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<Mutex<RecordStore<JsonFileStore>>>,
    pub rng: Arc<Mutex<StdRng>>,
    pub catalogue: Arc<Catalogue>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: StoreData, catalogue: Catalogue, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            records: Arc::new(Mutex::new(RecordStore::new(JsonFileStore::new(data_path, data)))),
            rng: Arc::new(Mutex::new(rng)),
            catalogue: Arc::new(catalogue),
        }
    }
}
