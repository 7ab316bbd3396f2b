use super::types::CapturedCommand;
use crate::config::WhitespaceMode;

/// Literal prefix that opens a capturable command.
pub const MARKER_TOKEN: &str = "ffmpeg";

/// Trailing character that continues a command on the next line.
pub const CONTINUATION_MARKER: char = '\\';

/// Check if a trimmed line opens a new command
pub fn starts_command(trimmed: &str) -> bool {
    trimmed.starts_with(MARKER_TOKEN)
}

/// Check if a trimmed line continues onto the next one
pub fn continues(trimmed: &str) -> bool {
    trimmed.ends_with(CONTINUATION_MARKER)
}

/// Normalize whitespace in command
pub fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Single pass over `"  "` pairs, the way older reports were produced.
pub fn collapse_double_spaces(line: &str) -> String {
    line.replace("  ", " ").trim().to_string()
}

/// Render a finalized command as one display line.
pub fn normalize_command(cmd: &CapturedCommand, mode: WhitespaceMode) -> String {
    let unmarked = cmd.joined().replace(CONTINUATION_MARKER, " ");
    match mode {
        WhitespaceMode::Collapse => normalize_whitespace(&unmarked),
        WhitespaceMode::Legacy => collapse_double_spaces(&unmarked),
    }
}
