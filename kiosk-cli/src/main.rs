//! Kiosk Simulators
//!
//! Interactive command-line coffee machine and unit converter.

use std::io;

use clap::Parser;

use kiosk_cli::config::{Cli, Commands};
use kiosk_cli::repl;

fn main() -> io::Result<()> {
    // Default to "warn"; RUST_LOG=debug shows transitions and mutations.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match cli.command {
        Commands::Convert => {
            log::debug!("starting unit converter session");
            repl::run_converter(stdin.lock(), &mut stdout)?;
        }
        command @ Commands::Coffee { .. } => {
            let mut machine = command
                .machine()
                .unwrap_or_default();
            log::debug!("starting coffee machine session: {:?}", machine);
            repl::run_machine(&mut machine, stdin.lock(), &mut stdout)?;
        }
    }

    log::debug!("session ended");
    Ok(())
}
