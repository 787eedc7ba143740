use std::sync::Mutex;

use crate::session::SessionState;
use crate::store::RecordStore;

pub struct AppState {
    pub store: Box<dyn RecordStore>,
    pub session: Mutex<SessionState>,
}
