use crate::config::Config;
use crate::types::activity::{ActivityRecord, Provider};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    batches: Arc<DashMap<String, CachedBatch>>,
}

/// One normalized refresh. Replaced wholesale, never merged into.
#[derive(Debug, Clone)]
pub struct StoredBatch {
    pub provider: Provider,
    pub records: Arc<Vec<ActivityRecord>>,
}

struct CachedBatch {
    batch: StoredBatch,
    inserted_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            batches: Arc::new(DashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn insert(&self, batch_id: String, batch: StoredBatch) {
        self.batches.insert(
            batch_id,
            CachedBatch {
                batch,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn get(&self, batch_id: &str) -> Option<StoredBatch> {
        self.batches.get(batch_id).map(|entry| entry.batch.clone())
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn evict_expired(&self, ttl: Duration) {
        let now = Instant::now();
        self.batches
            .retain(|_, cached| now.duration_since(cached.inserted_at) < ttl);
        tracing::info!("Batch eviction complete. Current size: {}", self.batches.len());
    }
}
