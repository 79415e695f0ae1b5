use std::path::Path;

use serde_json::json;

use crate::db::connection;
use crate::error::DescribeError;

pub fn run(store: Option<&Path>, json_output: bool) -> i32 {
    match run_inner(store) {
        Ok(path) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "success": true,
                        "data": { "path": path.to_string_lossy() }
                    }))
                    .unwrap()
                );
            } else {
                println!("Initialized property store at {}", path.display());
            }
            0
        }
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_inner(store: Option<&Path>) -> Result<std::path::PathBuf, DescribeError> {
    let path = match store {
        Some(path) => path.to_path_buf(),
        None => connection::default_store_path()?,
    };
    connection::init_store(&path)
}
