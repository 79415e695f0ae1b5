//! The describe pipeline: build the command, run it with fallback, turn the
//! first output line into a label and a commit count.

pub mod command;
pub mod executor;
pub mod parser;
pub mod runner;

pub use executor::{Executor, ProcessExecutor};
pub use runner::{Description, DescribeRunner, RunOutcome};
