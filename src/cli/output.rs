// Output formatting for CLI

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use oggdur::StreamInfo;

use crate::cli::CliResult;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable one-liners
    #[default]
    Pretty,
    /// One JSON object per file
    Json,
}

/// Per-file probe report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub file: String,
    pub duration_seconds: f64,
    pub channels: u8,
    pub sample_rate: u32,
    pub granule_position: u64,
    pub stream_length: u64,
}

impl DurationReport {
    pub fn new(file: &str, info: &StreamInfo) -> Self {
        DurationReport {
            file: file.to_string(),
            duration_seconds: info.duration_seconds(),
            channels: info.channels,
            sample_rate: info.sample_rate,
            granule_position: info.granule_position,
            stream_length: info.stream_length,
        }
    }
}

/// Format and output probe reports
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }

    /// Output one report
    pub fn output_report(&self, report: &DurationReport, writer: &mut impl Write) -> CliResult<()> {
        match self.format {
            OutputFormat::Pretty => {
                writeln!(writer, "{}: {:.2} s", report.file, report.duration_seconds)?;
                if self.verbose {
                    writeln!(writer, "  channels: {}", report.channels)?;
                    writeln!(writer, "  sample rate: {} Hz", report.sample_rate)?;
                    writeln!(writer, "  granule position: {}", report.granule_position)?;
                    writeln!(writer, "  stream length: {} bytes", report.stream_length)?;
                }
            }
            OutputFormat::Json => {
                writeln!(writer, "{}", serde_json::to_string(report)?)?;
            }
        }
        Ok(())
    }

    /// Print progress message unless quiet
    pub fn print_progress(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Print per-file error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }
}
