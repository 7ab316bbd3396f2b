use clap::Parser;
use command_extractor::{
    completion_summary, logging, ExtractorConfig, ReportFormat, UnterminatedPolicy,
    WhitespaceMode,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "extract-commands")]
#[command(about = "Collect ffmpeg invocations from shell scripts into one summary")]
#[command(version)]
struct Cli {
    /// Directory holding the `ffmpeg/` script folder and the report
    #[arg(long = "base-dir")]
    base_dir: Option<PathBuf>,

    /// Script directory (defaults to <base-dir>/ffmpeg)
    #[arg(long = "input")]
    input: Option<PathBuf>,

    /// Report path (defaults to <base-dir>/ffmpeg_commands_summary.txt)
    #[arg(long = "output")]
    output: Option<PathBuf>,

    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Keep a command left open by a trailing `\` at end of file
    #[arg(long = "flush-unterminated")]
    flush_unterminated: bool,

    /// Reproduce the old single-pass whitespace cleanup
    #[arg(long = "legacy-whitespace")]
    legacy_whitespace: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> std::io::Result<ExtractorConfig> {
        let base = match self.base_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let mut config = ExtractorConfig::from_base_dir(&base);
        if let Some(input) = self.input {
            config.input_dir = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        config.format = self.format;
        if self.flush_unterminated {
            config.unterminated = UnterminatedPolicy::Flush;
        }
        if self.legacy_whitespace {
            config.whitespace = WhitespaceMode::Legacy;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: cannot resolve working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match command_extractor::run(&config) {
        Ok(result) => {
            println!("{}", completion_summary(&result, &config.output_path));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
