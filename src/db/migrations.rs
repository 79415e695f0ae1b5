use rusqlite::Connection;

use crate::error::DescribeError;

pub fn run_migrations(conn: &Connection) -> Result<(), DescribeError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS properties (
            module TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (module, key)
        );

        CREATE INDEX IF NOT EXISTS idx_properties_key ON properties(key);
        ",
    )?;
    Ok(())
}
