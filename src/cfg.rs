// CfgSounds config generation
//
// Renders a description.ext document listing one sound class per OGG track:
//
//   class CfgSounds
//   {
//       tracks[]={};
//
//       class track_name
//       {
//           name = "track_name";
//           sound[] = {"\sounds\track name.ogg", 50.0, 1.0};
//           titles[] = {};
//       };
//   };
//
// Class names are derived from the file name: extension stripped, spaces
// replaced with underscores. The sound[] path keeps the original file name
// and uses backslash separators as the engine expects.

use std::io::{self, Write};

use chrono::Local;

/// One track destined for the generated config
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry {
    /// Config class name, derived from the file name
    pub class_name: String,
    /// File name as found on disk, including extension
    pub file_name: String,
    /// Playback duration in seconds
    pub duration: f64,
}

impl TrackEntry {
    pub fn new(file_name: &str, duration: f64) -> Self {
        TrackEntry {
            class_name: class_name_for(file_name),
            file_name: file_name.to_string(),
            duration,
        }
    }
}

/// Derive a config class name from a file name
///
/// Strips the last extension and replaces spaces with underscores, so
/// "main theme.ogg" becomes "main_theme".
pub fn class_name_for(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(file_name);
    stem.replace(' ', "_")
}

/// Write the CfgSounds document for `entries` to `writer`
///
/// `folder` is the sound folder name referenced by the generated paths,
/// not a filesystem path.
pub fn write_cfg_sounds<W: Write>(
    writer: &mut W,
    folder: &str,
    entries: &[TrackEntry],
) -> io::Result<()> {
    writeln!(
        writer,
        "// Generated by oggdur on {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer, "class CfgSounds")?;
    writeln!(writer, "{{")?;
    writeln!(writer, "    tracks[]={{}};")?;

    for entry in entries {
        writeln!(writer)?;
        writeln!(writer, "    class {}", entry.class_name)?;
        writeln!(writer, "    {{")?;
        writeln!(writer, "        name = \"{}\";", entry.class_name)?;
        writeln!(
            writer,
            "        sound[] = {{\"\\{}\\{}\", {}, 1.0}};",
            folder,
            entry.file_name,
            format_seconds(entry.duration)
        )?;
        writeln!(writer, "        titles[] = {{}};")?;
        writeln!(writer, "    }};")?;
    }

    writeln!(writer, "}};")?;
    Ok(())
}

/// Format a duration so whole seconds still carry a decimal point
fn format_seconds(duration: f64) -> String {
    if duration.fract() == 0.0 {
        format!("{:.1}", duration)
    } else {
        duration.to_string()
    }
}
