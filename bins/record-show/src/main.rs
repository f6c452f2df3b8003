mod cmd;

use std::process::ExitCode;

use clap::Parser;
use cmd::config::{Effective, ShowArgs};
use cmd::error::ShowError;

#[derive(Parser)]
#[command(name = "record-show", about = "Print number/text records")]
struct Cli {
    #[command(flatten)]
    args: ShowArgs,
}

fn try_main(cli: &Cli) -> Result<(), ShowError> {
    let eff = Effective::new(&cli.args)?;
    cmd::show::run_stdout(&eff)
}

fn main() -> ExitCode {
    // stdout carries the records, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match try_main(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
