use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use rusqlite::Connection;
use serde::Deserialize;

use super::error::ApiError;
use crate::clock::Clock;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// The single shared connection. Guard scopes must not cross an await.
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal(anyhow!("database lock poisoned")))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: String,
}

#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub unique_number: String,
}
