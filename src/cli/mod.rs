/// CLI layer: argument parsing, errors, logging, and output formatting.
pub mod args;
pub mod errors;
pub mod logging;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use errors::CliError;
pub use output::{OutputCtx, write_error};
