/// `--version`: print the version and license banner.
use crate::cli::{CliError, OutputCtx};
use crate::cli::output::write_version;
use crate::types::VersionOutput;

/// Run `dec2bin --version`.
///
/// # Errors
///
/// Returns `CliError::Io` if stdout cannot be written.
pub fn run(ctx: &OutputCtx) -> Result<(), CliError> {
    write_version(&VersionOutput::current(), ctx)?;
    Ok(())
}
