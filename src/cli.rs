use crate::colors::*;
use crate::config::{self, Config};
use crate::layout::{self, LINUX_BINARIES};
use crate::logging;
use crate::runner::SystemRunner;
use crate::strip::{strip_many, strip_one, StripTool};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "strip-binaries",
    version,
    about = "Strip linux binaries",
    long_about = "Strip debug symbols from Linux build outputs.\n\nExamples:\n  strip-binaries\n  strip-binaries -d out/Release --target-cpu arm64\n  strip-binaries -f out/Release/electron -v"
)]
pub struct StripCli {
    /// Path to the dir that contains files to strip.
    #[arg(long, short = 'd')]
    pub directory: Option<PathBuf>,
    /// Path to a specific file to strip.
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
    /// Prints the output of the subprocesses
    #[arg(long, short = 'v')]
    pub verbose: bool,
    /// Target cpu of binaries to strip
    #[arg(long = "target-cpu", default_value = "")]
    pub target_cpu: String,
}

impl StripCli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);
        if self.verbose {
            config::enable_verbose_mode();
        }
        let runner = SystemRunner::new(config::is_verbose_mode());
        let tool = StripTool::for_target_cpu(&self.target_cpu);
        tracing::debug!(tool = tool.executable(), target_cpu = %self.target_cpu, "selected strip tool");

        if let Some(file) = &self.file {
            strip_one(&runner, file, &self.target_cpu)
                .with_context(|| format!("strip {}", file.display()))?;
            println!(
                "{gray}[strip]{reset} {green}stripped{reset} {path}",
                gray = C_GRAY,
                reset = C_RESET,
                green = C_GREEN,
                path = file.display()
            );
            return Ok(());
        }

        let directory = match &self.directory {
            Some(dir) => dir.clone(),
            None => {
                let config = Config::from_process();
                let src_dir = layout::default_src_dir().context("resolve source dir")?;
                layout::resolve_out_dir(&config, &src_dir).context("resolve out dir")?
            }
        };
        let report = strip_many(&runner, &directory, LINUX_BINARIES, &self.target_cpu)
            .with_context(|| format!("strip binaries in {}", directory.display()))?;
        println!(
            "{gray}[strip]{reset} {green}stripped {n} binaries{reset} in {dir} {dim}({skipped} not present){reset}",
            gray = C_GRAY,
            reset = C_RESET,
            green = C_GREEN,
            dim = C_DIM,
            n = report.stripped.len(),
            skipped = report.skipped.len(),
            dir = directory.display()
        );
        Ok(())
    }
}
