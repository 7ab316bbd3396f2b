mod commands;
mod scanner;
mod types;

pub use commands::{
    collapse_double_spaces, continues, normalize_command, normalize_whitespace, starts_command,
    CONTINUATION_MARKER, MARKER_TOKEN,
};
pub use scanner::{scan_lines, LineScanner};
pub use types::{CapturedCommand, ScanOutput, ScanState};
