use crate::cli::commands::ConfigArgs;
use crate::config;
use crate::describe::{DescribeRunner, ProcessExecutor};
use crate::error::DescribeError;
use crate::output;

pub fn run(args: &ConfigArgs, json_output: bool) -> i32 {
    match run_inner(args, json_output) {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_inner(args: &ConfigArgs, json_output: bool) -> Result<i32, DescribeError> {
    let config = config::load(args.config.as_deref(), args.to_raw())?;
    let runner = DescribeRunner::new(config, ProcessExecutor);
    let description = runner.describe();
    let config = runner.config();

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(output::json::description_json(
                &description,
                &config.description_property,
                &config.commit_count_property,
            )))
            .unwrap()
        );
    } else {
        output::text::print_description(
            &description,
            &config.description_property,
            &config.commit_count_property,
        );
    }
    Ok(0)
}
