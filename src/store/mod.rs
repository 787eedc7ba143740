pub mod cache;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{BookingStatus, ConversationTurn, CustomerRecord};

pub use sqlite::SqliteStore;

/// The key-value table holding one row per booking, keyed by identity card
/// number. Reads come from a short-lived snapshot cache; every write must
/// invalidate that cache before returning so the next read reflects it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Arc<Vec<CustomerRecord>>, AppError>;

    /// Rejects with `DuplicateKey` when the identity card number exists.
    async fn create(&self, record: &CustomerRecord) -> Result<(), AppError>;

    /// Sets `booking_status` and nothing else. `NotFound` when the id is
    /// absent; bulk callers tolerate that per id.
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<(), AppError>;

    /// `NotFound` when the id is absent; bulk callers tolerate that per id.
    async fn remove(&self, id: &str) -> Result<(), AppError>;

    /// Projection of the conversation column only. `NotFound` when the
    /// record is absent; a record without a transcript yields an empty vec.
    async fn fetch_conversation(&self, id: &str) -> Result<Vec<ConversationTurn>, AppError>;
}
