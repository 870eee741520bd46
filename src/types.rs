/// Shared serializable output types.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as plain lines / a table. They are decoupled from `BinaryDigits` and
/// `GroupSpec`.
use serde::{Deserialize, Serialize};

use crate::cli::CliError;
use crate::cli::args::COPYRIGHT;

/// One converted input token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The decimal token exactly as given.
    pub input: String,
    /// Raw binary digits, no padding.
    pub binary: String,
    /// Number of significant binary digits (1 for zero).
    pub bits: usize,
    /// Padded and grouped form, present only with `--pretty-print`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl ConversionOutput {
    /// The text shown in plain and table output: grouped when available.
    #[must_use]
    pub fn display(&self) -> &str {
        self.formatted.as_deref().unwrap_or(&self.binary)
    }
}

/// Program identity for `--version`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionOutput {
    pub name: String,
    pub version: String,
    pub description: String,
    pub copyright: String,
    pub license: String,
}

impl VersionOutput {
    /// Build from the package metadata compiled into the binary.
    #[must_use]
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            description: env!("CARGO_PKG_DESCRIPTION").to_owned(),
            copyright: COPYRIGHT.to_owned(),
            license: env!("CARGO_PKG_LICENSE").to_owned(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &CliError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
