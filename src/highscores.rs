//! Best-run record
//!
//! A single high score persisted through the key-value store. Merging keeps
//! the larger of the stored and submitted values; with nothing stored, any
//! finished run qualifies.

use serde::{Deserialize, Serialize};

use crate::platform::storage::KeyValueStore;

/// Storage key for the record
const STORAGE_KEY: &str = "block_runner_highscore";

/// The persisted best-run record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore {
    /// Best score achieved on this machine
    pub best: u64,
    /// Unix timestamp (ms) when it was achieved
    pub timestamp: f64,
}

impl HighScore {
    /// Load the record, falling back to an empty one when nothing is stored
    /// or the stored record fails to parse.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(STORAGE_KEY) {
            Some(json) => match serde_json::from_str(&json) {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("discarding unreadable high score record: {err}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Submit a finished run. Persists when the record improved (or when no
    /// record existed yet). Returns true on a new best.
    pub fn submit(store: &mut dyn KeyValueStore, score: u64, timestamp: f64) -> bool {
        let existing = store
            .get(STORAGE_KEY)
            .and_then(|json| serde_json::from_str::<Self>(&json).ok());
        let improved = match existing {
            Some(record) => score > record.best,
            None => true,
        };

        if improved {
            let record = Self {
                best: score,
                timestamp,
            };
            match serde_json::to_string(&record) {
                Ok(json) => {
                    store.set(STORAGE_KEY, &json);
                    log::info!("new best score: {score}");
                }
                Err(err) => log::warn!("failed to encode high score record: {err}"),
            }
        }

        improved
    }
}
