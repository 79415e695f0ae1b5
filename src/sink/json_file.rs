use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::DescribeError;

use super::PropertySink;

/// Properties kept as a flat JSON object of strings in a file.
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
    properties: BTreeMap<String, String>,
}

impl JsonFileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DescribeError> {
        let path = path.into();
        let properties = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                DescribeError::sink(&display(&path), format!("not a JSON object of strings: {e}"))
                    .with_source(e)
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(DescribeError::sink(&display(&path), e.to_string()).with_source(e)),
        };
        Ok(Self { path, properties })
    }

    fn flush(&self) -> Result<(), DescribeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| DescribeError::sink(&self.name(), e.to_string()).with_source(e))?;
        }
        let content = serde_json::to_string_pretty(&self.properties).unwrap();
        fs::write(&self.path, content + "\n")
            .map_err(|e| DescribeError::sink(&self.name(), e.to_string()).with_source(e))
    }
}

fn display(path: &Path) -> String {
    format!("json:{}", path.display())
}

impl PropertySink for JsonFileSink {
    fn name(&self) -> String {
        display(&self.path)
    }

    fn get(&self, key: &str) -> Result<Option<String>, DescribeError> {
        Ok(self.properties.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DescribeError> {
        self.properties.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn entries(&self) -> Result<Vec<(String, String)>, DescribeError> {
        Ok(self
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
