use crate::store::HealthStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<HealthStore>>,
}

impl AppState {
    pub fn new(store: HealthStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
