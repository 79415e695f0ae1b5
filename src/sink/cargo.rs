use std::io::{self, Write};

use crate::error::DescribeError;

use super::PropertySink;

/// Emits `cargo:rustc-env=KEY=VALUE` directives so a build script can
/// forward the properties to the crate being compiled.
///
/// Write-only: lookups always report absence.
pub struct CargoEnvSink<W: Write = io::Stdout> {
    out: W,
}

impl CargoEnvSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> CargoEnvSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PropertySink for CargoEnvSink<W> {
    fn name(&self) -> String {
        "cargo".to_string()
    }

    fn get(&self, _key: &str) -> Result<Option<String>, DescribeError> {
        Ok(None)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DescribeError> {
        writeln!(self.out, "cargo:rustc-env={key}={value}")
            .and_then(|_| self.out.flush())
            .map_err(|e| DescribeError::sink("cargo", e.to_string()).with_source(e))
    }

    fn entries(&self) -> Result<Vec<(String, String)>, DescribeError> {
        Ok(Vec::new())
    }
}
