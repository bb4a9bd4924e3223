//! Slot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide read/write/clear over named storage slots.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `write_slot` upserts: a second write for the same key replaces the
//!   previous payload.
//! - `clear_slot` is idempotent.

use crate::persist::PersistResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable key-value slot interface injected into stores.
///
/// Implementations are synchronous; callers treat writes as local,
/// always-completing operations.
pub trait SlotRepository {
    /// Reads the payload stored under `key`, if any.
    fn read_slot(&self, key: &str) -> PersistResult<Option<String>>;
    /// Stores `payload` under `key`, replacing any previous value.
    fn write_slot(&self, key: &str, payload: &str) -> PersistResult<()>;
    /// Removes the slot for `key`. No-op when absent.
    fn clear_slot(&self, key: &str) -> PersistResult<()>;
}

/// SQLite-backed slot repository over the `storage_slots` table.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Wraps a bootstrapped connection (see `db::open_db`).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn read_slot(&self, key: &str) -> PersistResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM storage_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write_slot(&self, key: &str, payload: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO storage_slots (key, payload)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, payload],
        )?;
        Ok(())
    }

    fn clear_slot(&self, key: &str) -> PersistResult<()> {
        self.conn
            .execute("DELETE FROM storage_slots WHERE key = ?1;", [key])?;
        Ok(())
    }
}
