pub mod error;
pub mod migrations;
pub mod models;
pub mod queries;

pub use error::{StoreError, StoreResult};
pub use models::{NewPost, NewRecord, NewTag, NewUser, Record};
pub use queries::{Filter, Store};

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, warn};

/// Handle to the blog database. Cloned around behind an `Arc`; every access
/// goes through [`Database::transaction`].
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let db = Self::prepare(conn)?;
        info!("Database opened at {}", path.display());
        Ok(db)
    }

    /// Private database that lives as long as the handle. Used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(conn: Connection) -> StoreResult<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::run(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` as one atomic unit against the store.
    ///
    /// The closure sees a [`Store`] bound to a SQLite transaction. Returning
    /// `Ok` commits; returning `Err` rolls every statement back. The
    /// connection lock is held for the whole closure, so no other request can
    /// observe a half-applied operation.
    pub fn transaction<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Store<'_>) -> Result<T, E>,
        E: From<StoreError>,
    {
        // A panic inside an earlier closure dropped its transaction, which
        // rolled back; the connection itself is still consistent.
        let mut conn = self.conn.lock().unwrap_or_else(|poisoned| {
            warn!("Connection lock was poisoned by a panicked operation, recovering");
            poisoned.into_inner()
        });
        let tx = conn.transaction().map_err(StoreError::from)?;

        let result = f(&Store::new(&tx));

        match result {
            Ok(value) => {
                tx.commit().map_err(StoreError::from)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!("Rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}
