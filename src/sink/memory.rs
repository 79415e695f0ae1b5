use std::collections::BTreeMap;

use crate::error::DescribeError;

use super::PropertySink;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    properties: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }
}

impl PropertySink for MemorySink {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn get(&self, key: &str) -> Result<Option<String>, DescribeError> {
        Ok(self.properties.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DescribeError> {
        self.properties.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, DescribeError> {
        Ok(self
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
