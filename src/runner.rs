//! Process execution behind a small trait so callers can be tested without
//! spawning real tools.

use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Runs `program` with `args` to completion.
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput>;
}

/// Spawns real processes found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    /// Inherit the terminal instead of capturing output.
    pub verbose: bool,
}

impl SystemRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        tracing::debug!(program, ?args, verbose = self.verbose, "spawning");
        if self.verbose {
            let status = cmd.status()?;
            return Ok(CommandOutput { code: status.code(), ..CommandOutput::default() });
        }
        let output = cmd.output()?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
