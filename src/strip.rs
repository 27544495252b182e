use crate::error::ExternalToolError;
use crate::runner::CommandRunner;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Flags passed to every strip invocation, before the target path.
pub const STRIP_FLAGS: [&str; 3] = ["--discard-all", "--strip-debug", "--preserve-dates"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripTool {
    Native,
    Arm,
    Arm64,
    Mips64el,
}

impl StripTool {
    /// Unknown or empty CPU names use the host `strip`.
    pub fn for_target_cpu(target_cpu: &str) -> Self {
        match target_cpu {
            "arm" => StripTool::Arm,
            "arm64" => StripTool::Arm64,
            "mips64el" => StripTool::Mips64el,
            _ => StripTool::Native,
        }
    }

    pub fn executable(&self) -> &'static str {
        match self {
            StripTool::Native => "strip",
            StripTool::Arm => "arm-linux-gnueabihf-strip",
            StripTool::Arm64 => "aarch64-linux-gnu-strip",
            StripTool::Mips64el => "mips64el-redhat-linux-strip",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripReport {
    pub stripped: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Strips `path` in place. The file is handed to the tool as-is; a missing
/// file surfaces as the tool's own failure.
pub fn strip_one<R: CommandRunner + ?Sized>(
    runner: &R,
    path: &Path,
    target_cpu: &str,
) -> Result<(), ExternalToolError> {
    let tool = StripTool::for_target_cpu(target_cpu).executable();
    let mut args: Vec<OsString> = STRIP_FLAGS.iter().map(|f| OsString::from(*f)).collect();
    args.push(path.as_os_str().to_os_string());

    tracing::debug!(tool, path = %path.display(), target_cpu, "stripping");
    let output = runner.run(tool, &args).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ExternalToolError::NotFound { tool: tool.to_string() },
        _ => ExternalToolError::Spawn { tool: tool.to_string(), source: e },
    })?;
    if !output.success() {
        return Err(ExternalToolError::Failed {
            tool: tool.to_string(),
            path: path.to_path_buf(),
            code: output.code,
            stderr: output.stderr,
        });
    }
    Ok(())
}

/// Strips every name in `binaries` that exists as a regular file under
/// `directory`, in list order. Absent entries are skipped; the first tool
/// failure ends the sweep.
pub fn strip_many<R: CommandRunner + ?Sized>(
    runner: &R,
    directory: &Path,
    binaries: &[&str],
    target_cpu: &str,
) -> Result<StripReport, ExternalToolError> {
    let mut report = StripReport::default();
    for name in binaries {
        let binary_path = directory.join(name);
        if !binary_path.is_file() {
            tracing::debug!(path = %binary_path.display(), "not built, skipping");
            report.skipped.push(binary_path);
            continue;
        }
        strip_one(runner, &binary_path, target_cpu)?;
        report.stripped.push(binary_path);
    }
    Ok(report)
}
