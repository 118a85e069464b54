//! yamlcfg CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use yamlcfg::cli::{Cli, Commands};
use yamlcfg::infrastructure::logging::LoggerImpl;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match LoggerImpl::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => {
            yamlcfg::cli::handle_error(&err, cli.json);
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Check(args) => {
            yamlcfg::cli::commands::check::execute(args, cli.json).map(|status| status.exit_code())
        }
        Commands::Schema => yamlcfg::cli::commands::schema::execute(cli.json).map(|()| 0),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            yamlcfg::cli::handle_error(&err, cli.json);
            ExitCode::from(2)
        }
    }
}
