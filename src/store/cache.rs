use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use crate::models::CustomerRecord;

pub const SNAPSHOT_TTL: Duration = Duration::from_secs(60);

/// Single-entry snapshot cache bounding full-table scan cost. Reads within
/// the TTL reuse the last snapshot; every write path calls `invalidate` so
/// the next read observes the change immediately.
pub struct ReadCache {
    snapshots: Cache<(), Arc<Vec<CustomerRecord>>>,
}

impl ReadCache {
    pub fn new() -> Self {
        Self::with_ttl(SNAPSHOT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            snapshots: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    pub fn get(&self) -> Option<Arc<Vec<CustomerRecord>>> {
        self.snapshots.get(&())
    }

    pub fn put(&self, snapshot: Arc<Vec<CustomerRecord>>) {
        self.snapshots.insert((), snapshot);
    }

    pub fn invalidate(&self) {
        self.snapshots.invalidate(&());
    }
}

impl Default for ReadCache {
    fn default() -> Self {
        Self::new()
    }
}
