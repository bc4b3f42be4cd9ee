//! Owned store handle.
//!
//! # Responsibility
//! - Own the single SQLite connection for the caller's session.
//! - Hand out facades that borrow that connection.
//!
//! # Invariants
//! - The connection is migrated before the handle exists.
//! - The connection is released on `close` or drop, whichever comes first.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::repo::employee_repo::{RepoResult, SqliteEmployeeRepository};
use crate::service::employee_service::EmployeeService;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;

/// Caller-owned employee store.
pub struct EmployeeDb {
    conn: Connection,
}

impl EmployeeDb {
    /// Opens (or creates) a database file.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens an empty private in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Returns the CRUD facade bound to this store's connection.
    pub fn service(&self) -> RepoResult<EmployeeService<SqliteEmployeeRepository<'_>>> {
        let repo = SqliteEmployeeRepository::try_new(&self.conn)?;
        Ok(EmployeeService::new(repo))
    }

    /// Raw connection access for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection and reports any close failure.
    pub fn close(self) -> DbResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=db status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=db_close module=db status=error error_code=db_close_failed error={}",
                    err
                );
                Err(DbError::Sqlite(err))
            }
        }
    }
}
