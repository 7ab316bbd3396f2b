pub mod config;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod parser;
pub mod report;

pub use config::{ExtractorConfig, ReportFormat, UnterminatedPolicy, WhitespaceMode};
pub use error::{ExtractError, Result};
pub use extractor::{extract, ExtractionResult, ScriptCommands};
pub use report::{completion_summary, write_report, write_report_file};

/// Extract commands per `config` and write the report. Returns what was written.
pub fn run(config: &ExtractorConfig) -> Result<ExtractionResult> {
    let result = extract(config)?;
    write_report_file(&config.output_path, &result, config.format, config.whitespace)?;
    Ok(result)
}
