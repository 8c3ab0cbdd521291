use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::modules::portfolio::domain::CacheKey;

/// One async lock per cache key.
///
/// A caller that misses the cache holds its key's lane for the whole
/// fetch-and-store; concurrent callers for the same key queue behind it and
/// re-check the cache once they get in.
#[derive(Debug, Default)]
pub struct FetchGate {
    lanes: Mutex<HashMap<CacheKey, Arc<AsyncMutex<()>>>>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enter(&self, key: CacheKey) -> OwnedMutexGuard<()> {
        let lane = {
            let mut lanes = self.lanes.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(lanes.entry(key).or_default())
        };
        lane.lock_owned().await
    }
}
