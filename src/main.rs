// CLI binary entry point for oggdur

use std::process;

use anyhow::Context;
use clap::Parser;

mod cli;
#[cfg(test)]
mod testutil;

use cli::{commands, Commands, Config, OutputFormatter};

fn main() {
    let config = Config::parse();
    if let Err(e) = run(&config) {
        eprintln!("✗ {:#}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let formatter = OutputFormatter::new(config.format, config.quiet, config.verbose);

    match &config.command {
        Commands::Duration { files, output } => {
            commands::command_duration(files, output.as_deref(), &formatter)
                .context("duration command failed")?;
        }
        Commands::Generate { directory, output } => {
            commands::command_generate(directory, output, &formatter)
                .with_context(|| format!("could not generate '{}'", output))?;
        }
    }
    Ok(())
}
