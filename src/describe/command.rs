use crate::config::DescribeConfig;

/// Argument vector for the describe invocation.
///
/// `--dirty=<mark>`, `--tags` and the extra arguments are all honored, in
/// that order, after the fixed `describe` token. Values are passed through
/// as-is; there is no shell in between.
pub fn describe_command(config: &DescribeConfig) -> Vec<String> {
    let mut argv = vec![config.vcs_binary.clone(), "describe".to_string()];
    if config.dirty {
        argv.push(format!("--dirty={}", config.dirty_mark));
    }
    if config.tags {
        argv.push("--tags".to_string());
    }
    argv.extend(config.extra_arguments.iter().cloned());
    argv
}

/// Short hash of the latest commit, used when describe finds nothing.
/// The quotes in the format are literal and end up in the output.
pub fn fallback_command(config: &DescribeConfig) -> Vec<String> {
    vec![
        config.vcs_binary.clone(),
        "log".to_string(),
        "--pretty=format:\"%h\"".to_string(),
    ]
}
