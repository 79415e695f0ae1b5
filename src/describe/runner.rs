use log::{info, warn};
use serde::Serialize;

use crate::config::DescribeConfig;
use crate::error::DescribeError;
use crate::sink::{self, PropertySink};

use super::command::{describe_command, fallback_command};
use super::executor::Executor;
use super::parser::{commit_count, compose_label};

/// The two computed properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub label: String,
    pub commit_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Properties were computed and written.
    Published(Description),
    /// The primary sink already held the description; nothing ran.
    AlreadyPresent { existing: String },
}

pub struct DescribeRunner<E: Executor> {
    config: DescribeConfig,
    executor: E,
}

impl<E: Executor> DescribeRunner<E> {
    pub fn new(config: DescribeConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &DescribeConfig {
        &self.config
    }

    fn execute(&self, argv: &[String]) -> Option<String> {
        info!("Running {argv:?}");
        self.executor
            .first_line(argv, self.config.scm_directory.as_deref())
    }

    /// describe, then the short-hash fallback, then `failOutput`; wrapped in
    /// prefix and suffix.
    pub fn describe_label(&self) -> String {
        let raw = self
            .execute(&describe_command(&self.config))
            .or_else(|| self.execute(&fallback_command(&self.config)))
            .unwrap_or_else(|| self.config.fail_output.clone());
        compose_label(&self.config.output_prefix, &raw, &self.config.output_suffix)
    }

    pub fn describe(&self) -> Description {
        let label = self.describe_label();
        let commit_count = commit_count(&label, &self.config.fail_output);
        Description {
            label,
            commit_count,
        }
    }

    /// Compute and publish the properties unless the primary sink already
    /// has a description.
    pub fn run(
        &self,
        primary: &mut dyn PropertySink,
        auxiliary: &mut [Box<dyn PropertySink>],
    ) -> Result<RunOutcome, DescribeError> {
        if let Some(dir) = self.config.scm_directory.as_deref() {
            if !dir.is_dir() {
                warn!("SCM directory {} is not a directory", dir.display());
            }
        }

        if let Some(existing) = primary.get(&self.config.description_property)? {
            info!(
                "{} already set on {}: {existing}",
                self.config.description_property,
                primary.name()
            );
            return Ok(RunOutcome::AlreadyPresent { existing });
        }

        let description = self.describe();
        info!("Setting Git Describe: {}", description.label);
        // the description is the presence gate, so it goes last
        sink::publish_all(
            primary,
            auxiliary,
            self.config.broadcast_to_all_sinks,
            &[
                (
                    self.config.commit_count_property.as_str(),
                    Some(description.commit_count.as_str()),
                ),
                (
                    self.config.description_property.as_str(),
                    Some(description.label.as_str()),
                ),
            ],
        )?;
        Ok(RunOutcome::Published(description))
    }
}
