use std::path::PathBuf;

use crate::error::DescribeError;

use super::sqlite::DEFAULT_MODULE;
use super::{CargoEnvSink, JsonFileSink, PropertySink, SqliteSink};

/// Textual sink selector as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkSpec {
    Json(PathBuf),
    /// `module: None` means the default module when writing and every
    /// module when listing.
    Sqlite { path: PathBuf, module: Option<String> },
    Cargo,
}

impl SinkSpec {
    /// `json:<path>`, `sqlite:<path>[#<module>]` or `cargo`.
    pub fn parse(s: &str) -> Result<Self, DescribeError> {
        if s == "cargo" {
            return Ok(Self::Cargo);
        }
        if let Some(path) = s.strip_prefix("json:") {
            if path.is_empty() {
                return Err(DescribeError::validation("json sink needs a path: json:<path>"));
            }
            return Ok(Self::Json(PathBuf::from(path)));
        }
        if let Some(rest) = s.strip_prefix("sqlite:") {
            let (path, module) = match rest.rsplit_once('#') {
                Some((path, module)) => (path, Some(module)),
                None => (rest, None),
            };
            if path.is_empty() || module.is_some_and(str::is_empty) {
                return Err(DescribeError::validation(
                    "sqlite sink needs a path and optional module: sqlite:<path>[#<module>]",
                ));
            }
            return Ok(Self::Sqlite {
                path: PathBuf::from(path),
                module: module.map(str::to_string),
            });
        }
        Err(DescribeError::validation(format!(
            "Unknown sink '{s}'. Expected json:<path>, sqlite:<path>[#<module>] or cargo"
        )))
    }

    pub fn open(&self) -> Result<Box<dyn PropertySink>, DescribeError> {
        Ok(match self {
            Self::Json(path) => Box::new(JsonFileSink::open(path.clone())?),
            Self::Sqlite { path, module } => Box::new(SqliteSink::open(
                path,
                module.as_deref().unwrap_or(DEFAULT_MODULE),
            )?),
            Self::Cargo => Box::new(CargoEnvSink::stdout()),
        })
    }
}

impl std::str::FromStr for SinkSpec {
    type Err = DescribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
