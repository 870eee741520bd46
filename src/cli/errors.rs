/// Errors from the command-line layer.
use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

use crate::convert::ConvertError;

/// Everything that can end a `dec2bin` run early.
#[derive(Debug, Error)]
pub enum CliError {
    /// An option that needs a value was given none.
    #[error("The '{option}' option requires a value (e.g. '{option} {}')", example_value(.option))]
    MissingOptionValue {
        /// The option as typed, e.g. `--group-size`.
        option: String,
    },

    /// The `--group-size` value is not a positive integer that fits a `usize`.
    #[error("Invalid group size '{value}': expected a positive integer")]
    InvalidGroupSizeValue {
        /// The rejected value.
        value: String,
    },

    /// Any other option value that failed validation.
    #[error("Invalid value '{value}' for '{option}'")]
    InvalidOptionValue {
        /// The option as typed.
        option: String,
        /// The rejected value.
        value: String,
    },

    /// A `-`-prefixed token that is not a known option.
    #[error("Option not recognized: {option}")]
    UnrecognizedOption {
        /// The token as typed.
        option: String,
    },

    /// A parse failure with no dedicated variant; carries clap's own message.
    #[error("{message}")]
    Usage {
        /// Rendered clap message.
        message: String,
    },

    /// Nothing to convert.
    #[error("No input(s).")]
    NoInputProvided,

    /// A positional token could not be converted.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Writing results failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map a clap parse failure onto the error taxonomy.
    ///
    /// Returns `None` for help and version displays, which clap reports
    /// through its error type but which are not failures.
    #[must_use]
    pub fn from_clap(err: &clap::Error) -> Option<Self> {
        let arg = context_string(err, ContextKind::InvalidArg).map(option_name);
        let value = context_string(err, ContextKind::InvalidValue);

        let mapped = match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
            ErrorKind::UnknownArgument => Self::UnrecognizedOption {
                option: arg.unwrap_or_default(),
            },
            ErrorKind::InvalidValue | ErrorKind::ValueValidation => match (arg, value) {
                (Some(option), None | Some("")) => Self::MissingOptionValue { option },
                (Some(option), Some(value)) if option == "--group-size" => {
                    Self::InvalidGroupSizeValue {
                        value: value.to_owned(),
                    }
                }
                (Some(option), Some(value)) => Self::InvalidOptionValue {
                    option,
                    value: value.to_owned(),
                },
                (None, _) => usage(err),
            },
            _ => usage(err),
        };
        Some(mapped)
    }

    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoInputProvided => 0,
            Self::Convert(_) | Self::Io(_) => 1,
            Self::MissingOptionValue { .. }
            | Self::InvalidGroupSizeValue { .. }
            | Self::InvalidOptionValue { .. }
            | Self::UnrecognizedOption { .. }
            | Self::Usage { .. } => 2,
        }
    }

    /// Machine-readable `snake_case` code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingOptionValue { .. } => "missing_option_value",
            Self::InvalidGroupSizeValue { .. } => "invalid_group_size_value",
            Self::InvalidOptionValue { .. } => "invalid_option_value",
            Self::UnrecognizedOption { .. } => "unrecognized_option",
            Self::Usage { .. } => "usage",
            Self::NoInputProvided => "no_input_provided",
            Self::Convert(ConvertError::InvalidNumberFormat { .. }) => "invalid_number_format",
            Self::Convert(ConvertError::UnsupportedNegativeValue { .. }) => {
                "unsupported_negative_value"
            }
            Self::Convert(ConvertError::InvalidGroupSize { .. }) => "invalid_group_size",
            Self::Io(_) => "io_error",
        }
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<&str> {
    match err.get(kind)? {
        ContextValue::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// `"--group-size <N>"` → `"--group-size"`.
fn option_name(arg: &str) -> String {
    arg.split_whitespace().next().unwrap_or(arg).to_owned()
}

/// A plausible value for `option`, used in the missing-value hint.
fn example_value(option: &str) -> &'static str {
    match option {
        "--group-size" => "8",
        "--separator" => "_",
        "--output" => "json",
        _ => "VALUE",
    }
}

/// First line of clap's rendered error, which names the arguments involved.
fn usage(err: &clap::Error) -> CliError {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let message = first.strip_prefix("error: ").unwrap_or(first).trim();
    let message = if message.is_empty() {
        err.kind().as_str().unwrap_or("invalid arguments").to_owned()
    } else {
        message.to_owned()
    };
    CliError::Usage { message }
}
