use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{DescribeError, ErrorCode};

use super::migrations;

/// Find the .git root by walking up from current directory.
pub fn find_git_root() -> Result<PathBuf, DescribeError> {
    let mut dir = env::current_dir().map_err(|e| DescribeError::database(e.to_string()))?;
    loop {
        if dir.join(".git").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(DescribeError::new(
                ErrorCode::NotInitialized,
                "Not inside a git repository. Pass an explicit store path.",
            ));
        }
    }
}

/// Default location of the property store.
pub fn default_store_path() -> Result<PathBuf, DescribeError> {
    let root = find_git_root()?;
    Ok(root.join(".describer").join("properties.db"))
}

/// Open an existing property store. Returns error if not initialized.
pub fn open_store(path: &Path) -> Result<Connection, DescribeError> {
    if !path.exists() {
        return Err(DescribeError::not_initialized(&path.to_string_lossy()));
    }
    let conn = Connection::open(path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Initialize the store: create directories, database, and run migrations.
pub fn init_store(path: &Path) -> Result<PathBuf, DescribeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DescribeError::database(e.to_string()))?;
    }
    let conn = Connection::open(path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(path.to_path_buf())
}

fn configure_connection(conn: &Connection) -> Result<(), DescribeError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}
