use crate::runner::{CommandOutput, CommandRunner};
use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Records every invocation and answers from a script instead of spawning.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: RefCell<Vec<(String, Vec<OsString>)>>,
    /// Fail with exit code 1 when the last argument ends with this name.
    pub fail_on: Option<String>,
    pub tool_missing: bool,
}

impl FakeRunner {
    pub fn failing_on(name: &str) -> Self {
        Self { fail_on: Some(name.to_string()), ..Self::default() }
    }

    pub fn without_tool() -> Self {
        Self { tool_missing: true, ..Self::default() }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn targets(&self) -> Vec<OsString> {
        self.calls.borrow().iter().filter_map(|(_, args)| args.last().cloned()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[OsString]) -> io::Result<CommandOutput> {
        if self.tool_missing {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        self.calls.borrow_mut().push((program.to_string(), args.to_vec()));
        let target = args.last().map(|a| a.to_string_lossy().into_owned()).unwrap_or_default();
        if let Some(name) = &self.fail_on {
            if target.ends_with(name.as_str()) {
                return Ok(CommandOutput {
                    code: Some(1),
                    stderr: format!("{program}: {target}: file format not recognized\n"),
                    ..CommandOutput::default()
                });
            }
        }
        Ok(CommandOutput { code: Some(0), ..CommandOutput::default() })
    }
}

pub fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"\x7fELF").expect("write fake binary");
}
