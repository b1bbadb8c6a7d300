pub mod memory;
pub mod migrate;
pub mod oplog;
pub mod sqlite;
pub mod stats;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// Storage slot holding the serialized ledger state.
pub const LEDGER_SLOT: &str = "meal-ledger";

/// Whole-state persistence backend.
///
/// The ledger serializes its entire state into a single named slot on every
/// mutation and reads it back once at startup. Backends only move opaque
/// payloads; they never interpret the ledger shape.
pub trait StateStore {
    /// Read the payload stored under `slot`, if any.
    fn load(&mut self, slot: &str) -> AppResult<Option<String>>;

    /// Replace the payload stored under `slot`.
    /// Failures must surface as [`AppError::Persistence`](crate::errors::AppError).
    fn save(&mut self, slot: &str, payload: &str) -> AppResult<()>;

    /// Append a line to the operation log.
    fn record_op(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
