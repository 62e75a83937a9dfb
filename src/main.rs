use std::{fs::File, process::ExitCode};

use clap::Parser;
use structuring_ledger::{cli, telemetry};

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    telemetry::init(args.json_logs);

    let result = File::open(args.command.input())
        .map_err(Into::into)
        .and_then(|file| cli::run(&args.command, args.engine_config(), file, std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(input = %args.command.input().display(), "{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
