use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

/// Runs an external command and hands back its first line of stdout.
///
/// Implementations never fail loudly: anything that prevents a line from
/// being read is reported as `None`.
pub trait Executor {
    fn first_line(&self, argv: &[String], dir: Option<&Path>) -> Option<String>;
}

/// [`Executor`] backed by a real child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn first_line(&self, argv: &[String], dir: Option<&Path>) -> Option<String> {
        match read_first_line(argv, dir) {
            Ok(line) => line,
            Err(e) => {
                debug!("{} failed: {e}", argv.join(" "));
                None
            }
        }
    }
}

fn read_first_line(argv: &[String], dir: Option<&Path>) -> std::io::Result<Option<String>> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"))?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    let mut child = cmd.spawn()?;

    let line = match child.stdout.take() {
        Some(stdout) => {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            let read = reader.read_until(b'\n', &mut buf);
            // reader (and the pipe) dropped here on every path
            read.map(|n| (n > 0).then(|| strip_line_ending(&buf)))
        }
        None => Ok(None),
    };

    match child.try_wait() {
        Ok(Some(status)) => debug!("{program} exited with {status}"),
        Ok(None) => debug!("{program} still running after first line, not waiting"),
        Err(e) => debug!("{program}: cannot query exit status: {e}"),
    }

    line
}

fn strip_line_ending(buf: &[u8]) -> String {
    let mut end = buf.len();
    if end > 0 && buf[end - 1] == b'\n' {
        end -= 1;
        if end > 0 && buf[end - 1] == b'\r' {
            end -= 1;
        }
    }
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
