pub mod commands;
pub mod describe;
pub mod init;
pub mod publish;
pub mod show;

pub use commands::*;

use crate::error::DescribeError;
use crate::output;

/// Report `err` the way every command does and give the exit code.
pub(crate) fn report_error(err: &DescribeError, json_output: bool) -> i32 {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&output::json::error(err)).unwrap());
    } else {
        eprintln!("Error: {}", err.message);
    }
    1
}
