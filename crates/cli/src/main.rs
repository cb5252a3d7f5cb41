// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::process::ExitCode;

use clap::Parser;

use gitconf::cli::{Cli, Command};
use gitconf::logging;

mod cmd_show;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Command::Show(args) => cmd_show::run(&cli, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("gitconf: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
