//! seqcheck - output test harness for the sequential-numbers exercise
//!
//! Invoked with no arguments it runs `./program` (or `./program.exe`),
//! captures stdout, and checks the output against `expected_output.txt`.

use clap::Parser;
use seqcheck::{cli, common};

#[derive(Parser)]
#[command(name = "seqcheck", about = "Verify a program prints the numbers 1-5")]
#[command(version, long_about = None)]
struct Cli {
    /// Echo the expected and actual output sequences before validation
    #[arg(long, short)]
    verbose: bool,

    /// Override the run timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    match cli::run(cli.verbose, cli.timeout).await {
        Ok(result) if result.passed => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
