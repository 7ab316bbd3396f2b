//! Run configuration.
//!
//! Paths are explicit values handed to the extractor; nothing is derived from
//! the executable's own location.

use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Directory under the base directory holding the scripts.
pub const DEFAULT_INPUT_DIR: &str = "ffmpeg";

/// Report file name under the base directory.
pub const DEFAULT_OUTPUT_FILE: &str = "ffmpeg_commands_summary.txt";

/// Suffix a file needs to be scanned.
pub const SCRIPT_EXTENSION: &str = "sh";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// How runs of whitespace in a flattened command are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceMode {
    /// Every whitespace run becomes a single space.
    #[default]
    Collapse,
    /// One pass over `"  "` pairs. Longer runs survive partially.
    Legacy,
}

/// What happens to a command still open at end of file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedPolicy {
    #[default]
    Discard,
    Flush,
}

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub format: ReportFormat,
    pub whitespace: WhitespaceMode,
    pub unterminated: UnterminatedPolicy,
}

impl ExtractorConfig {
    /// `<base>/ffmpeg` in, `<base>/ffmpeg_commands_summary.txt` out.
    pub fn from_base_dir(base: &Path) -> Self {
        Self {
            input_dir: base.join(DEFAULT_INPUT_DIR),
            output_path: base.join(DEFAULT_OUTPUT_FILE),
            format: ReportFormat::default(),
            whitespace: WhitespaceMode::default(),
            unterminated: UnterminatedPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_layout() {
        let cfg = ExtractorConfig::from_base_dir(Path::new("/work/media"));
        assert_eq!(cfg.input_dir, PathBuf::from("/work/media/ffmpeg"));
        assert_eq!(
            cfg.output_path,
            PathBuf::from("/work/media/ffmpeg_commands_summary.txt")
        );
        assert_eq!(cfg.format, ReportFormat::Text);
        assert_eq!(cfg.whitespace, WhitespaceMode::Collapse);
        assert_eq!(cfg.unterminated, UnterminatedPolicy::Discard);
    }
}
