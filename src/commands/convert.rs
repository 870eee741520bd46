/// `convert` command: turn every positional token into binary and print it.
use std::io;

use crate::cli::output::write_conversions;
use crate::cli::{Cli, CliError, OutputCtx};
use crate::convert::{ConvertError, GroupSpec, convert, format_grouped};
use crate::types::ConversionOutput;

/// Run the conversion of `cli.numbers`.
///
/// Every token is converted before anything is written, so a bad token
/// anywhere in the list leaves stdout empty.
///
/// # Errors
///
/// Returns `CliError::NoInputProvided` when there is nothing to convert,
/// `CliError::Convert` for the first token that is not a non-negative decimal
/// integer, and `CliError::Io` if stdout cannot be written.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), CliError> {
    if cli.numbers.is_empty() {
        return Err(CliError::NoInputProvided);
    }

    let spec = if cli.pretty_print {
        Some(GroupSpec::new(cli.group_size, cli.separator)?)
    } else {
        None
    };

    let outputs = {
        let _timer = ctx.timer("convert");
        cli.numbers
            .iter()
            .map(|token| convert_token(token, spec.as_ref()))
            .collect::<Result<Vec<_>, _>>()?
    };

    let _timer = ctx.timer("render");
    write_conversions(&outputs, ctx).or_else(ignore_broken_pipe)?;
    Ok(())
}

/// Convert one token, grouping the digits when `spec` is given.
///
/// # Errors
///
/// Returns `ConvertError` if `token` is not a non-negative decimal integer.
pub fn convert_token(
    token: &str,
    spec: Option<&GroupSpec>,
) -> Result<ConversionOutput, ConvertError> {
    let digits = convert(token)?;
    let formatted = spec.map(|s| format_grouped(&digits, s));
    tracing::debug!(input = token, bits = digits.bit_len(), "converted");

    Ok(ConversionOutput {
        input: token.to_owned(),
        bits: digits.bit_len(),
        binary: digits.into_string(),
        formatted,
    })
}

/// A closed pipe (`dec2bin ... | head -1`) is not a failure.
fn ignore_broken_pipe(err: io::Error) -> io::Result<()> {
    if err.kind() == io::ErrorKind::BrokenPipe {
        Ok(())
    } else {
        Err(err)
    }
}
