use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::RawConfig;

const VERSION: &str = env!("DESCRIBER_VERSION");

#[derive(Parser)]
#[command(
    name = "describer",
    version = VERSION,
    about = "Publish git describe output as build properties",
    after_help = "\
PROPERTIES:
  describe          prefix + first line of `git describe` + suffix
  git.commit.count  commits since the tag, taken from the -<n>-g<hash> tail

FALLBACK:
  git describe -> git log --pretty=format:\"%h\" -> fail output (default `unknown`)

SINKS:
  json:<path>               flat JSON object of strings
  sqlite:<path>[#<module>]  property store created by `describer init`
  cargo                     cargo:rustc-env=KEY=VALUE lines on stdout

EXIT CODES:
  0  Success (including a description that was already present)
  1  Error (config, sink, SCM directory)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the SQLite property store
    Init {
        /// Store path (default: <git-root>/.describer/properties.db)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Compute the description and commit count without writing anywhere
    Describe {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Compute the properties and write them into sinks
    #[command(after_help = "\
NOTE:
  Nothing runs when the primary sink already holds the description property.
  --also sinks only receive the properties with --broadcast.")]
    Publish {
        /// Primary sink
        #[arg(long)]
        sink: String,

        /// Additional sink, repeatable
        #[arg(long)]
        also: Vec<String>,

        /// Mirror the properties into every --also sink
        #[arg(long)]
        broadcast: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the properties held by a sink
    Show {
        #[arg(long)]
        sink: String,
    },
}

/// Command-line configuration layer. Every flag overrides the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Config file (default: <scm-directory>/.describer.json if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the git commands run in
    #[arg(long)]
    pub scm_directory: Option<PathBuf>,

    /// Version control binary
    #[arg(long)]
    pub vcs_binary: Option<String>,

    /// Text before the describe output (default: git-)
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text after the describe output
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Deprecated alias of --suffix
    #[arg(long, hide = true, allow_hyphen_values = true)]
    pub postfix: Option<String>,

    /// Text used when no version can be determined (default: unknown)
    #[arg(long, allow_hyphen_values = true)]
    pub fail_output: Option<String>,

    /// Pass --dirty=<mark> to git describe
    #[arg(long)]
    pub dirty: bool,

    /// Marker for a modified working tree (default: dirty)
    #[arg(long)]
    pub dirty_mark: Option<String>,

    /// Pass --tags to git describe
    #[arg(long)]
    pub tags: bool,

    /// Extra argument for git describe, repeatable, passed verbatim
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Property name for the description (default: describe)
    #[arg(long)]
    pub description_property: Option<String>,

    /// Property name for the commit count (default: git.commit.count)
    #[arg(long)]
    pub commit_count_property: Option<String>,
}

impl ConfigArgs {
    /// Flags that were not given stay unset so the config file can fill them.
    pub fn to_raw(&self) -> RawConfig {
        RawConfig {
            scm_directory: self.scm_directory.clone(),
            vcs_binary: self.vcs_binary.clone(),
            output_prefix: self.prefix.clone(),
            output_suffix: self.suffix.clone(),
            output_postfix: self.postfix.clone(),
            fail_output: self.fail_output.clone(),
            extra_arguments: (!self.args.is_empty()).then(|| self.args.clone()),
            dirty: self.dirty.then_some(true),
            dirty_mark: self.dirty_mark.clone(),
            tags: self.tags.then_some(true),
            description_property: self.description_property.clone(),
            commit_count_property: self.commit_count_property.clone(),
            broadcast_to_all_sinks: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn unset_flags_stay_unset() {
        let cli = Cli::try_parse_from(["describer", "describe"]).unwrap();
        let Commands::Describe { config } = cli.command else {
            panic!("expected describe");
        };
        assert_eq!(config.to_raw(), RawConfig::default());
    }

    #[test]
    fn extra_args_accept_hyphens() {
        let cli = Cli::try_parse_from([
            "describer", "describe", "--arg", "--long", "--arg", "--match", "--arg", "v*",
        ])
        .unwrap();
        let Commands::Describe { config } = cli.command else {
            panic!("expected describe");
        };
        assert_eq!(
            config.to_raw().extra_arguments,
            Some(vec!["--long".to_string(), "--match".to_string(), "v*".to_string()])
        );
    }
}
