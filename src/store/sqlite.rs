use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{BookingStatus, ConversationTurn, CustomerRecord};
use crate::store::cache::ReadCache;
use crate::store::RecordStore;

pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
    cache: ReadCache,
}

impl SqliteStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self {
            db,
            cache: ReadCache::new(),
        }
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn fetch_all(&self) -> Result<Arc<Vec<CustomerRecord>>, AppError> {
        if let Some(snapshot) = self.cache.get() {
            return Ok(snapshot);
        }

        let customers = {
            let db = self.db.lock().unwrap();
            queries::list_customers(&db)?
        };

        let snapshot = Arc::new(customers);
        self.cache.put(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    async fn create(&self, record: &CustomerRecord) -> Result<(), AppError> {
        {
            let db = self.db.lock().unwrap();
            queries::insert_customer(&db, record)?;
        }
        self.cache.invalidate();
        Ok(())
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<(), AppError> {
        let updated = {
            let db = self.db.lock().unwrap();
            queries::set_booking_status(&db, id, status)?
        };
        if !updated {
            return Err(AppError::NotFound(format!("customer {id}")));
        }
        self.cache.invalidate();
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        let deleted = {
            let db = self.db.lock().unwrap();
            queries::delete_customer(&db, id)?
        };
        if !deleted {
            return Err(AppError::NotFound(format!("customer {id}")));
        }
        self.cache.invalidate();
        Ok(())
    }

    async fn fetch_conversation(&self, id: &str) -> Result<Vec<ConversationTurn>, AppError> {
        let turns = {
            let db = self.db.lock().unwrap();
            queries::get_conversation(&db, id)?
        };
        turns.ok_or_else(|| AppError::NotFound(format!("customer {id}")))
    }
}
