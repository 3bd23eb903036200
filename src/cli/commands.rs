// CLI command implementations

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use glob::glob;

use oggdur::cfg::{self, TrackEntry};
use oggdur::OggVorbisFile;

use crate::cli::output::{DurationReport, OutputFormatter};
use crate::cli::{CliError, CliResult};

/// Report playback durations for the given files
///
/// Per-file failures are logged and skipped; the command only fails outright
/// when no file could be read at all.
pub fn command_duration(
    files: &[String],
    output: Option<&str>,
    formatter: &OutputFormatter,
) -> CliResult<()> {
    if files.is_empty() {
        return Err(CliError::NoFilesSpecified);
    }

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };

    let mut succeeded = 0usize;
    for file_path in files {
        match OggVorbisFile::new(file_path).probe() {
            Ok(info) => {
                let report = DurationReport::new(file_path, &info);
                formatter.output_report(&report, &mut writer)?;
                succeeded += 1;
            }
            Err(e) => {
                formatter.print_error(&format!("{}: {}", file_path, e));
            }
        }
    }
    writer.flush()?;

    if succeeded == 0 {
        return Err(CliError::Other("no readable OGG files".to_string()));
    }
    Ok(())
}

/// Scan a folder for .ogg files and write a CfgSounds config
pub fn command_generate(
    directory: &str,
    output: &str,
    formatter: &OutputFormatter,
) -> CliResult<()> {
    let entries = collect_tracks(directory, formatter)?;

    // The generated paths reference the folder by name, not by location
    let folder = Path::new(directory)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.to_string());

    let mut writer = BufWriter::new(File::create(output)?);
    cfg::write_cfg_sounds(&mut writer, &folder, &entries)?;
    writer.flush()?;

    formatter.print_progress(&format!(
        "File '{}' has been created successfully.",
        output
    ));
    Ok(())
}

/// Probe every .ogg file in `directory`, skipping unreadable ones
fn collect_tracks(directory: &str, formatter: &OutputFormatter) -> CliResult<Vec<TrackEntry>> {
    let pattern = format!("{}/*.ogg", directory);
    let mut entries = Vec::new();

    for path in glob(&pattern)?.flatten() {
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        match OggVorbisFile::new(&path).duration() {
            Ok(duration) => entries.push(TrackEntry::new(&file_name, duration)),
            Err(e) => {
                formatter.print_error(&format!(
                    "Skipping file {} due to error: {}",
                    file_name, e
                ));
            }
        }
    }

    Ok(entries)
}
