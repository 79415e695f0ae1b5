//! Derive a version label and commit count from `git describe` and publish
//! them as build properties.
//!
//! ```no_run
//! use describer::config::DescribeConfig;
//! use describer::describe::{DescribeRunner, ProcessExecutor, RunOutcome};
//! use describer::sink::MemorySink;
//!
//! let runner = DescribeRunner::new(DescribeConfig::default(), ProcessExecutor);
//! let mut props = MemorySink::new();
//! if let Ok(RunOutcome::Published(d)) = runner.run(&mut props, &mut []) {
//!     println!("{} ({} commits since tag)", d.label, d.commit_count);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod describe;
pub mod error;
pub mod output;
pub mod sink;
