use rusqlite::{params, Connection, OptionalExtension};

use crate::error::DescribeError;

pub fn get_property(conn: &Connection, module: &str, key: &str) -> Result<Option<String>, DescribeError> {
    let value = conn
        .query_row(
            "SELECT value FROM properties WHERE module = ?1 AND key = ?2",
            params![module, key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_property(conn: &Connection, module: &str, key: &str, value: &str) -> Result<(), DescribeError> {
    conn.execute(
        "INSERT INTO properties (module, key, value) VALUES (?1, ?2, ?3)
         ON CONFLICT(module, key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        params![module, key, value],
    )?;
    Ok(())
}

/// `(key, value)` pairs of one module, sorted by key.
pub fn list_properties(conn: &Connection, module: &str) -> Result<Vec<(String, String)>, DescribeError> {
    let mut stmt = conn.prepare(
        "SELECT key, value FROM properties WHERE module = ?1 ORDER BY key",
    )?;
    let props = stmt
        .query_map(params![module], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(props)
}

pub fn list_modules(conn: &Connection) -> Result<Vec<String>, DescribeError> {
    let mut stmt = conn.prepare("SELECT DISTINCT module FROM properties ORDER BY module")?;
    let modules = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn memory_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn upsert_and_read() {
        let conn = memory_store();
        assert_eq!(get_property(&conn, "root", "describe").unwrap(), None);
        set_property(&conn, "root", "describe", "git-v1").unwrap();
        set_property(&conn, "root", "describe", "git-v2").unwrap();
        assert_eq!(get_property(&conn, "root", "describe").unwrap().as_deref(), Some("git-v2"));
        assert_eq!(list_properties(&conn, "root").unwrap().len(), 1);
    }

    #[test]
    fn modules_are_separate_namespaces() {
        let conn = memory_store();
        set_property(&conn, "core", "describe", "git-a").unwrap();
        set_property(&conn, "web", "describe", "git-b").unwrap();
        assert_eq!(get_property(&conn, "core", "describe").unwrap().as_deref(), Some("git-a"));
        assert_eq!(get_property(&conn, "web", "describe").unwrap().as_deref(), Some("git-b"));
        assert_eq!(list_modules(&conn).unwrap(), vec!["core".to_string(), "web".to_string()]);
    }
}
