use serde_json::json;

use crate::cli::commands::ConfigArgs;
use crate::config::{self, RawConfig};
use crate::describe::{DescribeRunner, ProcessExecutor, RunOutcome};
use crate::error::DescribeError;
use crate::output;
use crate::sink::{PropertySink, SinkSpec};

pub struct PublishArgs<'a> {
    pub sink: &'a str,
    pub also: &'a [String],
    pub broadcast: bool,
    pub config: &'a ConfigArgs,
}

pub fn run(args: PublishArgs<'_>, json_output: bool) -> i32 {
    match run_inner(&args, json_output) {
        Ok(code) => code,
        Err(e) => super::report_error(&e, json_output),
    }
}

fn run_inner(args: &PublishArgs<'_>, json_output: bool) -> Result<i32, DescribeError> {
    let overrides = RawConfig {
        broadcast_to_all_sinks: args.broadcast.then_some(true),
        ..args.config.to_raw()
    };
    let config = config::load(args.config.config.as_deref(), overrides)?;

    let primary_spec = SinkSpec::parse(args.sink)?;
    let mut primary = primary_spec.open()?;
    let mut auxiliary = args
        .also
        .iter()
        .map(|s| SinkSpec::parse(s).and_then(|spec| spec.open()))
        .collect::<Result<Vec<Box<dyn PropertySink>>, _>>()?;

    let runner = DescribeRunner::new(config, ProcessExecutor);
    let outcome = runner.run(primary.as_mut(), &mut auxiliary)?;
    let config = runner.config();
    let mirrored: Vec<String> = if config.broadcast_to_all_sinks {
        auxiliary.iter().map(|s| s.name()).collect()
    } else {
        Vec::new()
    };

    match outcome {
        RunOutcome::Published(description) => {
            if json_output {
                let mut data = output::json::description_json(
                    &description,
                    &config.description_property,
                    &config.commit_count_property,
                );
                data["published"] = json!(true);
                data["sink"] = json!(primary.name());
                data["broadcast"] = json!(mirrored);
                println!("{}", serde_json::to_string_pretty(&output::json::success(data)).unwrap());
            } else if primary_spec != SinkSpec::Cargo {
                println!("Published to {}:", primary.name());
                output::text::print_description(
                    &description,
                    &config.description_property,
                    &config.commit_count_property,
                );
                for name in &mirrored {
                    println!("  mirrored to {name}");
                }
            }
        }
        RunOutcome::AlreadyPresent { existing } => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "published": false,
                        "sink": primary.name(),
                        "label": existing
                    })))
                    .unwrap()
                );
            } else {
                println!(
                    "{} already set in {}: {existing}",
                    config.description_property,
                    primary.name()
                );
            }
        }
    }
    Ok(0)
}
