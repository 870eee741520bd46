/// Command dispatch: routes a parsed `Cli` to version output or conversion.
pub mod convert;
pub mod version;

use crate::cli::{Cli, CliError, OutputCtx};

/// Dispatch a parsed `Cli` to its handler.
///
/// `--version` wins over everything else, matching `--help`.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), CliError> {
    if cli.version {
        version::run(ctx)
    } else {
        convert::run(cli, ctx)
    }
}
