//! Platform-dispatch launcher binary.
//!
//! Classifies the host OS and hands control to `./run.sh` on macOS/Linux.
//! Other platforms get a banner and a clean exit. A script failure is fatal.

use anyhow::Result;
use clap::Parser;

use launcher::exit_codes;
use launcher::io::script::ProcessRunner;
use launcher::launch::dispatch;
use launcher::logging;
use launcher::platform::Platform;

#[derive(Parser)]
#[command(
    name = "launcher",
    version,
    about = "Start the local app via ./run.sh on supported platforms"
)]
struct Cli {}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let platform = Platform::detect();
    dispatch(&platform, &ProcessRunner)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args() {
        assert!(Cli::try_parse_from(["launcher"]).is_ok());
    }

    #[test]
    fn parse_rejects_unexpected_args() {
        assert!(Cli::try_parse_from(["launcher", "extra"]).is_err());
    }
}
