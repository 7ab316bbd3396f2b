//! Report Writer: renders an `ExtractionResult` as text or JSON.

use crate::config::{ReportFormat, WhitespaceMode};
use crate::error::{ExtractError, Result};
use crate::extractor::ExtractionResult;
use crate::parser::normalize_command;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const REPORT_TITLE: &str = "# FFmpeg Commands Summary";
pub const REPORT_SUBTITLE: &str = "# Generated for total analysis of all scripts";

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    scripts_scanned: usize,
    scripts: Vec<JsonScript<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonScript<'a> {
    file: &'a str,
    commands: Vec<JsonCommand>,
}

#[derive(Debug, Serialize)]
struct JsonCommand {
    command: String,
    first_line: usize,
    last_line: usize,
}

fn write_text<W: Write>(
    out: &mut W,
    result: &ExtractionResult,
    mode: WhitespaceMode,
) -> io::Result<()> {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "{REPORT_SUBTITLE}")?;
    writeln!(out)?;

    for script in result.with_commands() {
        writeln!(out, "## {}", script.file_name)?;
        for cmd in &script.commands {
            writeln!(out, "```bash")?;
            writeln!(out, "{}", normalize_command(cmd, mode))?;
            writeln!(out, "```")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn json_report(result: &ExtractionResult, mode: WhitespaceMode) -> JsonReport<'_> {
    JsonReport {
        scripts_scanned: result.scripts_scanned,
        scripts: result
            .with_commands()
            .map(|script| JsonScript {
                file: &script.file_name,
                commands: script
                    .commands
                    .iter()
                    .map(|cmd| JsonCommand {
                        command: normalize_command(cmd, mode),
                        first_line: cmd.first_line,
                        last_line: cmd.last_line,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Write the report to any writer.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &ExtractionResult,
    format: ReportFormat,
    mode: WhitespaceMode,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text(out, result, mode),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &json_report(result, mode))?;
            writeln!(out)
        }
    }
}

/// Create (or overwrite) `path` and write the report into it.
pub fn write_report_file(
    path: &Path,
    result: &ExtractionResult,
    format: ReportFormat,
    mode: WhitespaceMode,
) -> Result<()> {
    let io_err = |source: io::Error| ExtractError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = fs::File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, result, format, mode).map_err(io_err)?;
    out.flush().map_err(io_err)
}

/// Two-line operator summary printed after a run.
pub fn completion_summary(result: &ExtractionResult, output: &Path) -> String {
    format!(
        "Extraction complete. Found {} scripts.\nOutput saved to: {}",
        result.scripts_scanned,
        output.display()
    )
}
