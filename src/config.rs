use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::DescribeError;

pub const DEFAULT_VCS_BINARY: &str = "git";
pub const DEFAULT_OUTPUT_PREFIX: &str = "git-";
pub const DEFAULT_FAIL_OUTPUT: &str = "unknown";
pub const DEFAULT_DIRTY_MARK: &str = "dirty";
pub const DEFAULT_DESCRIPTION_PROPERTY: &str = "describe";
pub const DEFAULT_COMMIT_COUNT_PROPERTY: &str = "git.commit.count";

/// File looked up in the SCM directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".describer.json";

/// Resolved configuration for one describe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfig {
    pub scm_directory: Option<PathBuf>,
    pub vcs_binary: String,
    pub output_prefix: String,
    pub output_suffix: String,
    pub fail_output: String,
    pub extra_arguments: Vec<String>,
    pub dirty: bool,
    pub dirty_mark: String,
    pub tags: bool,
    pub description_property: String,
    pub commit_count_property: String,
    pub broadcast_to_all_sinks: bool,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        RawConfig::default().resolve()
    }
}

/// One configuration layer as read from a file or the command line.
///
/// `output_postfix` is the deprecated spelling of `output_suffix`. It only
/// exists here; [`RawConfig::resolve`] folds it away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    pub scm_directory: Option<PathBuf>,
    pub vcs_binary: Option<String>,
    pub output_prefix: Option<String>,
    pub output_suffix: Option<String>,
    pub output_postfix: Option<String>,
    pub fail_output: Option<String>,
    pub extra_arguments: Option<Vec<String>>,
    pub dirty: Option<bool>,
    pub dirty_mark: Option<String>,
    pub tags: Option<bool>,
    pub description_property: Option<String>,
    pub commit_count_property: Option<String>,
    pub broadcast_to_all_sinks: Option<bool>,
}

impl RawConfig {
    pub fn from_json(content: &str) -> Result<Self, DescribeError> {
        serde_json::from_str(content)
            .map_err(|e| DescribeError::config(format!("Invalid config: {e}")).with_source(e))
    }

    pub fn from_file(path: &Path) -> Result<Self, DescribeError> {
        let content = fs::read_to_string(path).map_err(|e| {
            DescribeError::config(format!("Cannot read config {}: {e}", path.display()))
                .with_source(e)
        })?;
        Self::from_json(&content).map_err(|mut e| {
            e.message = format!("{} ({})", e.message, path.display());
            e
        })
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: RawConfig) -> RawConfig {
        RawConfig {
            scm_directory: other.scm_directory.or(self.scm_directory),
            vcs_binary: other.vcs_binary.or(self.vcs_binary),
            output_prefix: other.output_prefix.or(self.output_prefix),
            output_suffix: other.output_suffix.or(self.output_suffix),
            output_postfix: other.output_postfix.or(self.output_postfix),
            fail_output: other.fail_output.or(self.fail_output),
            extra_arguments: other.extra_arguments.or(self.extra_arguments),
            dirty: other.dirty.or(self.dirty),
            dirty_mark: other.dirty_mark.or(self.dirty_mark),
            tags: other.tags.or(self.tags),
            description_property: other.description_property.or(self.description_property),
            commit_count_property: other.commit_count_property.or(self.commit_count_property),
            broadcast_to_all_sinks: other.broadcast_to_all_sinks.or(self.broadcast_to_all_sinks),
        }
    }

    pub fn resolve(self) -> DescribeConfig {
        if self.output_postfix.is_some() {
            warn!("outputPostfix is deprecated, use outputSuffix");
        }
        DescribeConfig {
            scm_directory: self.scm_directory,
            vcs_binary: self.vcs_binary.unwrap_or_else(|| DEFAULT_VCS_BINARY.to_string()),
            output_prefix: self
                .output_prefix
                .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string()),
            output_suffix: self
                .output_suffix
                .or(self.output_postfix)
                .unwrap_or_default(),
            fail_output: self
                .fail_output
                .unwrap_or_else(|| DEFAULT_FAIL_OUTPUT.to_string()),
            extra_arguments: self.extra_arguments.unwrap_or_default(),
            dirty: self.dirty.unwrap_or(false),
            dirty_mark: self
                .dirty_mark
                .unwrap_or_else(|| DEFAULT_DIRTY_MARK.to_string()),
            tags: self.tags.unwrap_or(false),
            description_property: self
                .description_property
                .unwrap_or_else(|| DEFAULT_DESCRIPTION_PROPERTY.to_string()),
            commit_count_property: self
                .commit_count_property
                .unwrap_or_else(|| DEFAULT_COMMIT_COUNT_PROPERTY.to_string()),
            broadcast_to_all_sinks: self.broadcast_to_all_sinks.unwrap_or(false),
        }
    }
}

/// Build the effective config: file layer (explicit or discovered) under
/// the command-line layer.
pub fn load(explicit_file: Option<&Path>, overrides: RawConfig) -> Result<DescribeConfig, DescribeError> {
    let file_layer = match explicit_file {
        Some(path) => RawConfig::from_file(path)?,
        None => {
            let base = overrides
                .scm_directory
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            let candidate = base.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                debug!("Using config file {}", candidate.display());
                RawConfig::from_file(&candidate)?
            } else {
                RawConfig::default()
            }
        }
    };
    Ok(file_layer.merge(overrides).resolve())
}
