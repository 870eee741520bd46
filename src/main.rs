#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! dec2bin — convert arbitrary-precision decimal integers to binary.

mod cli;
mod commands;
mod convert;
mod types;

use clap::Parser;

use cli::{Cli, CliError, OutputCtx, OutputFormat, write_error};
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match CliError::from_clap(&err) {
            None => err.exit(),
            // The output format is not known yet, so parse errors are always text.
            Some(cli_err) => fail(&cli_err, OutputFormat::Plain),
        },
    };

    cli::logging::init(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    if let Err(err) = commands::dispatch(&cli, &ctx) {
        fail(&err, ctx.format);
    }
}

fn fail(err: &CliError, format: OutputFormat) -> ! {
    let error_output = ErrorOutput::from_cli_error(err);
    write_error(&error_output, format);
    std::process::exit(err.exit_code());
}
