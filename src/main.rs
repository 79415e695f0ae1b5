use std::process;

use anyhow::Context;
use clap::Parser;

use describer::cli;
use describer::cli::commands::{Cli, Commands};

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init()
        .context("cannot install logger")
}

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    if let Err(e) = init_logging(cli_args.verbose) {
        eprintln!("warning: {e:#}");
    }

    let exit_code = match cli_args.command {
        Commands::Init { store } => cli::init::run(store.as_deref(), json_output),
        Commands::Describe { config } => cli::describe::run(&config, json_output),
        Commands::Publish {
            sink,
            also,
            broadcast,
            config,
        } => cli::publish::run(
            cli::publish::PublishArgs {
                sink: &sink,
                also: &also,
                broadcast,
                config: &config,
            },
            json_output,
        ),
        Commands::Show { sink } => cli::show::run(&sink, json_output),
    };

    process::exit(exit_code);
}
