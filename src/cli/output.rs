/// Output formatting: plain, JSON, and table modes.
use std::io::{self, Write};
use std::time::Instant;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ConversionOutput, ErrorOutput, VersionOutput};

const LICENSE_NOTICE: &str = "\
This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.";

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, phase timers are armed.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named phase timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Conversions ---

/// Write conversion results to stdout.
///
/// # Errors
///
/// Returns the underlying I/O error if stdout cannot be written.
pub fn write_conversions(items: &[ConversionOutput], ctx: &OutputCtx) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_conversions(&mut out, items, ctx)?;
    out.flush()
}

/// Render conversion results into any writer.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn render_conversions<W: Write>(
    out: &mut W,
    items: &[ConversionOutput],
    ctx: &OutputCtx,
) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Json => write_json(out, items),
        OutputFormat::Compact => write_compact_json(out, items),
        OutputFormat::Ndjson => write_ndjson(out, items),
        OutputFormat::Plain => {
            for item in items {
                writeln!(out, "{}", item.display())?;
            }
            Ok(())
        }
        OutputFormat::Table => write_conversions_table(out, items, ctx),
    }
}

fn write_conversions_table<W: Write>(
    out: &mut W,
    items: &[ConversionOutput],
    ctx: &OutputCtx,
) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["DECIMAL", "BINARY", "BITS"]);
    }
    for item in items {
        let bits = item.bits.to_string();
        table.add_row([item.input.as_str(), item.display(), bits.as_str()]);
    }
    writeln!(out, "{table}")
}

// --- Version ---

/// Write the version banner to stdout.
///
/// # Errors
///
/// Returns the underlying I/O error if stdout cannot be written.
pub fn write_version(info: &VersionOutput, ctx: &OutputCtx) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match ctx.format {
        OutputFormat::Json => write_json(&mut out, info)?,
        OutputFormat::Compact | OutputFormat::Ndjson => write_compact_json(&mut out, info)?,
        OutputFormat::Plain | OutputFormat::Table => {
            writeln!(out, "{} Version {}", info.name, info.version)?;
            writeln!(out, "{}", info.copyright)?;
            writeln!(out)?;
            writeln!(out, "{LICENSE_NOTICE}")?;
        }
    }
    out.flush()
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if format.is_json() {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(phase = self.label, elapsed_ms = ms, "timing");
        }
    }
}

// --- Generic JSON helpers ---

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_compact_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn write_ndjson<W: Write, T: Serialize>(out: &mut W, values: &[T]) -> io::Result<()> {
    for v in values {
        write_compact_json(out, v)?;
    }
    Ok(())
}
