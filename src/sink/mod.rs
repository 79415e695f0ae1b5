//! Property sinks: where the computed properties end up.

pub mod cargo;
pub mod json_file;
pub mod memory;
pub mod spec;
pub mod sqlite;

pub use cargo::CargoEnvSink;
pub use json_file::JsonFileSink;
pub use memory::MemorySink;
pub use spec::SinkSpec;
pub use sqlite::SqliteSink;

use log::debug;

use crate::error::DescribeError;

/// A string-to-string property store owned by the surrounding build.
pub trait PropertySink {
    /// Human readable identity, used in logs and errors.
    fn name(&self) -> String;

    fn get(&self, key: &str) -> Result<Option<String>, DescribeError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), DescribeError>;

    /// All properties currently held, sorted by key.
    fn entries(&self) -> Result<Vec<(String, String)>, DescribeError>;
}

/// Write one property. An absent value is skipped, not an error.
pub fn publish(
    sink: &mut dyn PropertySink,
    key: &str,
    value: Option<&str>,
) -> Result<(), DescribeError> {
    match value {
        Some(value) => {
            debug!("{}: {key} = {value}", sink.name());
            sink.set(key, value)
        }
        None => Ok(()),
    }
}

/// Mirror `properties` into every auxiliary sink when `broadcast` is set,
/// then write them into `primary`, each in slice order.
///
/// The primary's last write happens only after every other write succeeded,
/// so callers put the key that marks a finished run last.
pub fn publish_all(
    primary: &mut dyn PropertySink,
    auxiliary: &mut [Box<dyn PropertySink>],
    broadcast: bool,
    properties: &[(&str, Option<&str>)],
) -> Result<(), DescribeError> {
    if broadcast {
        for sink in auxiliary.iter_mut() {
            for (key, value) in properties {
                publish(sink.as_mut(), key, *value)?;
            }
        }
    }
    for (key, value) in properties {
        publish(primary, key, *value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_is_skipped() {
        let mut sink = MemorySink::new();
        publish(&mut sink, "describe", None).unwrap();
        assert_eq!(sink.get("describe").unwrap(), None);
        publish(&mut sink, "describe", Some("git-v1")).unwrap();
        assert_eq!(sink.get("describe").unwrap().as_deref(), Some("git-v1"));
    }

    #[test]
    fn broadcast_reaches_every_auxiliary() {
        let mut primary = MemorySink::new();
        let mut aux: Vec<Box<dyn PropertySink>> =
            vec![Box::new(MemorySink::new()), Box::new(MemorySink::new())];
        let props = [("describe", Some("git-v1-2-gabcdef0")), ("git.commit.count", Some("2"))];
        publish_all(&mut primary, &mut aux, true, &props).unwrap();

        let expected = primary.entries().unwrap();
        assert_eq!(expected.len(), 2);
        for sink in &aux {
            assert_eq!(sink.entries().unwrap(), expected);
        }
    }

    #[test]
    fn no_broadcast_leaves_auxiliary_alone() {
        let mut primary = MemorySink::new();
        let mut aux: Vec<Box<dyn PropertySink>> = vec![Box::new(MemorySink::new())];
        publish_all(&mut primary, &mut aux, false, &[("describe", Some("git-v1"))]).unwrap();
        assert!(aux[0].entries().unwrap().is_empty());
        assert_eq!(primary.entries().unwrap().len(), 1);
    }
}
