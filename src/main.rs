use anyhow::Result;
use strip_binaries::cli::StripCli;
use strip_binaries::colors::{C_RED, C_RESET};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{C_RED}strip-binaries error:{C_RESET} {:#}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = StripCli::parse();
    cli.run()
}
