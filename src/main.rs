use clap::Parser;
use opsrun::commands::{self, Cli};
use opsrun::logging;
use std::process;

/// Entry point for the run-ops CLI.
/// Runs every job in the job file and prints the number of rewritten files.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::run(&cli) {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            let code = e.exit_code();
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            process::exit(code);
        }
    }
}
