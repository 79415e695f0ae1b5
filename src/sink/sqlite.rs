use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::db::{self, property_repo};
use crate::error::DescribeError;

use super::PropertySink;

pub const DEFAULT_MODULE: &str = "root";

/// One module's properties inside a shared SQLite property store.
pub struct SqliteSink {
    conn: Connection,
    path: PathBuf,
    module: String,
}

impl SqliteSink {
    /// Open a module namespace in an initialized store.
    pub fn open(path: &Path, module: &str) -> Result<Self, DescribeError> {
        let conn = db::open_store(path)?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
            module: module.to_string(),
        })
    }
}

impl PropertySink for SqliteSink {
    fn name(&self) -> String {
        format!("sqlite:{}#{}", self.path.display(), self.module)
    }

    fn get(&self, key: &str) -> Result<Option<String>, DescribeError> {
        property_repo::get_property(&self.conn, &self.module, key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DescribeError> {
        property_repo::set_property(&self.conn, &self.module, key, value)
    }

    fn entries(&self) -> Result<Vec<(String, String)>, DescribeError> {
        property_repo::list_properties(&self.conn, &self.module)
    }
}
