//! CLI entry point.
//!
//! Parses arguments, composes the context through `bootstrap`, and routes
//! each command to its handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use appx_cli::handlers::{self, package::PackageRequest};
use appx_cli::{Cli, CliConfig, CliError, Commands, bootstrap, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&config);

    match command {
        Commands::Locate => handlers::locate::execute(&ctx),
        Commands::Config { command } => handlers::config::execute(&ctx, command),
        command => match PackageRequest::from_command(command, ctx.settings())? {
            Some(request) => handlers::package::execute(&ctx, &request),
            None => Ok(()),
        },
    }
}
