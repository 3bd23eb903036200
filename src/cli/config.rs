// CLI configuration

use clap::{Parser, Subcommand};

use crate::cli::output::OutputFormat;

/// oggdur - OGG Vorbis duration CLI tool
#[derive(Parser, Debug)]
#[command(name = "oggdur")]
#[command(about = "Read OGG Vorbis durations and generate CfgSounds configs", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress messages)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (show sample rate, channels and granule position)
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print playback durations for OGG file(s)
    Duration {
        /// OGG file path(s)
        #[arg(value_name = "FILE")]
        files: Vec<String>,

        /// Output to file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate a CfgSounds description.ext from a folder of OGG files
    Generate {
        /// Folder containing the .ogg files
        #[arg(short, long, default_value = "sounds")]
        directory: String,

        /// Config file to write
        #[arg(short, long, default_value = "description.ext")]
        output: String,
    },
}
