/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

use crate::convert::group::{DEFAULT_GROUP_SIZE, DEFAULT_SEPARATOR};

macro_rules! copyright {
    () => {
        "Copyright (C) 2019 Jose Fernando Lopez Fernandez"
    };
}

/// Copyright line shown by `--help` and `--version`.
pub const COPYRIGHT: &str = copyright!();

const NOTICE: &str = concat!(
    "dec2bin Version ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    copyright!(),
    "\n\n",
    "This program comes with ABSOLUTELY NO WARRANTY; for details type `--version'.\n",
    "This is free software, and you are welcome to redistribute it\n",
    "under certain conditions; type `show c' for details."
);

/// dec2bin — convert arbitrary-precision decimal integers to binary.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "dec2bin",
    about = "Convert arbitrary-precision decimal integers to binary",
    before_help = NOTICE,
    disable_version_flag = true
)]
pub struct Cli {
    /// Decimal integers to convert, one output line each.
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Print program version info and exit.
    #[arg(long)]
    pub version: bool,

    /// Print binary representation separated by groups.
    #[arg(long)]
    pub pretty_print: bool,

    /// Print binary representation in groups of N (used with --pretty-print).
    #[arg(
        long,
        value_name = "N",
        env = "DEC2BIN_GROUP_SIZE",
        default_value_t = DEFAULT_GROUP_SIZE,
        value_parser = parse_group_size
    )]
    pub group_size: usize,

    /// Character placed between groups (used with --pretty-print).
    #[arg(
        long,
        value_name = "CHAR",
        env = "DEC2BIN_SEPARATOR",
        default_value_t = DEFAULT_SEPARATOR,
        value_parser = parse_separator
    )]
    pub separator: char,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "plain")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long)]
    pub no_header: bool,

    /// Print debug logs and phase timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Binary digits only, one number per line.
    #[default]
    Plain,
    /// JSON array (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
}

impl OutputFormat {
    /// Whether this format emits JSON.
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::Compact | Self::Ndjson)
    }
}

fn parse_group_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a valid group size: {e}"))?;
    if size == 0 {
        return Err("group size must be at least 1".to_owned());
    }
    Ok(size)
}

fn parse_separator(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected exactly one character, got '{s}'")),
    }
}
