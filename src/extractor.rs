//! Scan every script in a directory and collect its commands.

use crate::config::{ExtractorConfig, UnterminatedPolicy};
use crate::discovery::{enumerate_scripts, script_name};
use crate::error::{ExtractError, Result};
use crate::parser::{scan_lines, CapturedCommand};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Commands captured from one script, in scan order.
#[derive(Debug, Clone)]
pub struct ScriptCommands {
    pub file_name: String,
    pub commands: Vec<CapturedCommand>,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Every enumerated script, matched or not.
    pub scripts_scanned: usize,
    /// One entry per script, in enumeration order.
    pub scripts: Vec<ScriptCommands>,
}

impl ExtractionResult {
    /// Scripts that produced at least one command.
    pub fn with_commands(&self) -> impl Iterator<Item = &ScriptCommands> {
        self.scripts.iter().filter(|s| !s.commands.is_empty())
    }

    pub fn total_commands(&self) -> usize {
        self.scripts.iter().map(|s| s.commands.len()).sum()
    }
}

/// Scan a single script's text.
pub fn extract_from_source(
    source: &str,
    policy: UnterminatedPolicy,
    name: &str,
) -> Vec<CapturedCommand> {
    let out = scan_lines(source.lines());
    let mut commands = out.commands;

    if let Some(open) = out.unterminated {
        match policy {
            UnterminatedPolicy::Discard => warn!(
                script = name,
                first_line = open.first_line,
                last_line = open.last_line,
                "dropping command left open at end of file"
            ),
            UnterminatedPolicy::Flush => {
                debug!(
                    script = name,
                    first_line = open.first_line,
                    "flushing unterminated command"
                );
                commands.push(open);
            }
        }
    }

    commands
}

/// Read and scan one script file.
pub fn extract_file(path: &Path, policy: UnterminatedPolicy) -> Result<ScriptCommands> {
    let file_name = script_name(path);
    let source = fs::read_to_string(path).map_err(|source| ExtractError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;

    let commands = extract_from_source(&source, policy, &file_name);
    debug!(script = %file_name, commands = commands.len(), "scanned script");

    Ok(ScriptCommands {
        file_name,
        commands,
    })
}

/// Enumerate and scan every script under `config.input_dir`.
pub fn extract(config: &ExtractorConfig) -> Result<ExtractionResult> {
    let scripts = enumerate_scripts(&config.input_dir)?;
    let mut result = ExtractionResult {
        scripts_scanned: scripts.len(),
        scripts: Vec::with_capacity(scripts.len()),
    };

    for path in &scripts {
        result.scripts.push(extract_file(path, config.unterminated)?);
    }

    info!(
        scripts = result.scripts_scanned,
        commands = result.total_commands(),
        "extraction finished"
    );
    Ok(result)
}
