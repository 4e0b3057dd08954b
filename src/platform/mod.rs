//! Platform abstraction layer
//!
//! Browser/native differences the simulation core must not see:
//! - Storage (LocalStorage on web, in-memory elsewhere)

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use storage::{KeyValueStore, MemoryStore};
