use std::path::Path;

use serde_json::{json, Value};

use crate::db::{self, property_repo};
use crate::error::DescribeError;
use crate::output;
use crate::sink::SinkSpec;

pub fn run(sink: &str, json_output: bool) -> i32 {
    match run_inner(sink, json_output) {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_inner(sink: &str, json_output: bool) -> Result<i32, DescribeError> {
    if let SinkSpec::Sqlite { path, module: None } = SinkSpec::parse(sink)? {
        return show_store(sink, &path, json_output);
    }

    let sink = SinkSpec::parse(sink)?.open()?;
    let entries = sink.entries()?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "sink": sink.name(),
                "properties": output::json::properties_json(&entries)
            })))
            .unwrap()
        );
    } else {
        output::text::print_properties(&sink.name(), &entries);
    }
    Ok(0)
}

/// Every module of a SQLite store, grouped.
fn show_store(name: &str, path: &Path, json_output: bool) -> Result<i32, DescribeError> {
    let conn = db::open_store(path)?;
    let mut modules = Vec::new();
    for module in property_repo::list_modules(&conn)? {
        let entries = property_repo::list_properties(&conn, &module)?;
        modules.push((module, entries));
    }

    if json_output {
        let map: serde_json::Map<String, Value> = modules
            .iter()
            .map(|(module, entries)| (module.clone(), output::json::properties_json(entries)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(json!({
                "sink": name,
                "modules": map
            })))
            .unwrap()
        );
    } else {
        output::text::print_modules(name, &modules);
    }
    Ok(0)
}
